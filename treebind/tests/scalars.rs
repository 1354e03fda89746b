use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use indoc::indoc;
use treebind::FromDocument;

#[derive(FromDocument, Debug, PartialEq, Clone, Copy)]
enum NoteStatus {
    Unknown,
    Completed,
    SoSo,
}

#[derive(FromDocument, Debug, PartialEq)]
struct Note {
    id: i32,
    status: NoteStatus,
    message: String,
}

#[test]
fn enum_values_match_canonically() {
    let xml = indoc! {r#"
        <Note Id="1" Status="Completed">
          <Message>Hello</Message>
        </Note>
    "#};
    let note: Note = treebind::from_str(xml).unwrap();
    assert_eq!(note.status, NoteStatus::Completed);

    // Dashes and case are ignored, same as property names.
    let note: Note = treebind::from_str(r#"<Note Status="so-so" />"#).unwrap();
    assert_eq!(note.status, NoteStatus::SoSo);

    let note: Note = treebind::from_str("<Note />").unwrap();
    assert_eq!(note.status, NoteStatus::Unknown);

    let err = treebind::from_str::<Note>(r#"<Note Status="pondering" />"#).unwrap_err();
    assert!(err.to_string().contains("'status'"), "got: {err}");
}

#[derive(FromDocument, Debug, PartialEq)]
struct Misc {
    unique_id: uuid::Uuid,
    empty_guid: uuid::Uuid,
    is_cool: bool,
    tiny_span: Duration,
    long_span: Duration,
    updated: DateTime<FixedOffset>,
}

#[test]
fn guids_booleans_durations_and_offsets() {
    let xml = indoc! {r#"
        <Misc>
          <UniqueId>AC1FC4BC-087A-4242-B8EE-C53EBE9887A5</UniqueId>
          <EmptyGuid />
          <IsCool>1</IsCool>
          <TinySpan>00:00:00.125</TinySpan>
          <LongSpan>21:30:07</LongSpan>
          <Updated>2013-02-08T09:18:22+10:00</Updated>
        </Misc>
    "#};
    let misc: Misc = treebind::from_str(xml).unwrap();
    assert_eq!(
        misc.unique_id,
        "AC1FC4BC-087A-4242-B8EE-C53EBE9887A5".parse::<uuid::Uuid>().unwrap()
    );
    assert_eq!(misc.empty_guid, uuid::Uuid::nil());
    assert!(misc.is_cool);
    assert_eq!(misc.tiny_span, Duration::from_millis(125));
    assert_eq!(misc.long_span, Duration::new(21 * 3600 + 30 * 60 + 7, 0));
    // The source offset is kept, not converted away.
    assert_eq!(misc.updated.offset().local_minus_utc(), 10 * 3600);
    assert_eq!(misc.updated.naive_local().to_string(), "2013-02-08 09:18:22");
}

#[test]
fn durations_accept_raw_tick_counts() {
    let misc: Misc = treebind::from_str("<Misc><TinySpan>468006</TinySpan></Misc>").unwrap();
    assert_eq!(misc.tiny_span, Duration::from_nanos(46_800_600));
}

#[derive(FromDocument, Debug, PartialEq)]
struct Order {
    amount: f64,
}

#[test]
fn culture_decimal_separators_apply() {
    let german = treebind::Culture {
        decimal_separator: ',',
        group_separator: '.',
        ..treebind::Culture::invariant()
    };
    let order: Order = treebind::Deserializer::new()
        .culture(german)
        .deserialize("<Order><Amount>1.234,56</Amount></Order>")
        .unwrap();
    assert_eq!(order.amount, 1234.56);
}

#[test]
fn cdata_and_entities_reach_string_fields() {
    let xml = indoc! {r#"
        <Note>
          <Message><![CDATA[fish & chips <tonight>]]></Message>
        </Note>
    "#};
    let note: Note = treebind::from_str(xml).unwrap();
    assert_eq!(note.message, "fish & chips <tonight>");
}
