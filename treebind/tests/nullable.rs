use chrono::NaiveDate;
use indoc::indoc;
use treebind::FromDocument;

#[derive(FromDocument, Debug, Default, PartialEq)]
struct NullableValues {
    id: Option<i32>,
    start_date: Option<chrono::NaiveDateTime>,
    unique_id: Option<uuid::Uuid>,
}

#[test]
fn vacant_elements_are_none() {
    let xml = indoc! {r#"
        <NullableValues>
          <Id />
          <StartDate />
          <UniqueId />
        </NullableValues>
    "#};
    let values: NullableValues = treebind::from_str(xml).unwrap();
    assert_eq!(values, NullableValues::default());
}

#[test]
fn vacant_elements_with_attributes_are_still_none() {
    let xml = indoc! {r#"
        <NullableValues>
          <Id SomeAttribute="x" />
          <StartDate culture="en-us" />
          <UniqueId type="guid" />
        </NullableValues>
    "#};
    let values: NullableValues = treebind::from_str(xml).unwrap();
    assert_eq!(values, NullableValues::default());
}

#[test]
fn absent_elements_are_none() {
    let values: NullableValues = treebind::from_str("<NullableValues />").unwrap();
    assert_eq!(values, NullableValues::default());
}

#[test]
fn populated_elements_are_some() {
    let xml = indoc! {r#"
        <NullableValues>
          <Id>123</Id>
          <StartDate>2013-02-08 09:18:22</StartDate>
          <UniqueId>d7d5c278-0ac4-4b10-99f2-9d6e22a6e5d5</UniqueId>
        </NullableValues>
    "#};
    let values: NullableValues = treebind::from_str(xml).unwrap();
    assert_eq!(values.id, Some(123));
    assert_eq!(
        values.start_date,
        Some(
            NaiveDate::from_ymd_opt(2013, 2, 8)
                .unwrap()
                .and_hms_opt(9, 18, 22)
                .unwrap()
        )
    );
    assert_eq!(
        values.unique_id,
        Some("d7d5c278-0ac4-4b10-99f2-9d6e22a6e5d5".parse().unwrap())
    );
}

#[test]
fn partially_populated_documents_mix_some_and_none() {
    let xml = indoc! {r#"
        <NullableValues>
          <Id>123</Id>
          <StartDate />
        </NullableValues>
    "#};
    let values: NullableValues = treebind::from_str(xml).unwrap();
    assert_eq!(values.id, Some(123));
    assert_eq!(values.start_date, None);
    assert_eq!(values.unique_id, None);
}

#[test]
fn garbage_in_an_optional_field_is_still_an_error() {
    let err =
        treebind::from_str::<NullableValues>("<NullableValues><Id>abc</Id></NullableValues>")
            .unwrap_err();
    assert!(err.to_string().contains("'id'"), "got: {err}");
}

#[derive(FromDocument, Debug, PartialEq)]
struct Oddball {
    #[document(rename = "oddballPropertyName")]
    good_property: Option<String>,
    #[document(rename = "oddballListName")]
    items: Vec<String>,
}

#[test]
fn renames_are_matched_exclusively() {
    let xml = indoc! {r#"
        <Oddball>
          <GoodProperty>decoy</GoodProperty>
          <oddballPropertyName>wanted</oddballPropertyName>
          <oddballListName>
            <Item>one</Item>
            <Item>two</Item>
          </oddballListName>
        </Oddball>
    "#};
    let oddball: Oddball = treebind::from_str(xml).unwrap();
    assert_eq!(oddball.good_property.as_deref(), Some("wanted"));
    assert_eq!(oddball.items, ["one", "two"]);
}
