//! The [`FromDocument`] trait and its structural impls.
//!
//! Destination types implement [`FromDocument`] (usually via the derive) to
//! describe how they are populated from an [`Element`] tree. Two entry
//! points exist because position matters: a value can sit *at* a node
//! (`from_root`) or be a named property *of* a node (`from_field`).

use crate::error::DeserializeError;
use crate::field::{Field, Source, locate};
use crate::naming::canonical;
use crate::node::Element;
use crate::options::Context;

/// A type that can be populated from a document tree.
pub trait FromDocument: Sized {
    /// Serialized type name, used for item matching in collections and for
    /// root resolution. `None` for types without a meaningful element name
    /// (scalars, containers).
    const NAME: Option<&'static str> = None;

    /// Build a value from the node the value itself occupies.
    fn from_root(node: &Element, cx: &Context<'_>) -> Result<Self, DeserializeError>;

    /// Build a value for the property `field` of `node`.
    fn from_field(
        node: &Element,
        field: &Field,
        cx: &Context<'_>,
    ) -> Result<Self, DeserializeError>;
}

/// `Option<T>` maps absence to `None` where the underlying type would
/// substitute its empty value. A located but vacant element, or a blank
/// attribute, also count as absent.
impl<T: FromDocument> FromDocument for Option<T> {
    const NAME: Option<&'static str> = T::NAME;

    fn from_root(node: &Element, cx: &Context<'_>) -> Result<Self, DeserializeError> {
        if node.is_vacant() {
            return Ok(None);
        }
        T::from_root(node, cx).map(Some)
    }

    fn from_field(
        node: &Element,
        field: &Field,
        cx: &Context<'_>,
    ) -> Result<Self, DeserializeError> {
        match locate(node, field) {
            None => Ok(None),
            Some(Source::Element(child)) if child.is_vacant() => Ok(None),
            Some(Source::Attribute(value)) if value.trim().is_empty() => Ok(None),
            Some(_) => T::from_field(node, field, cx).map(Some),
        }
    }
}

/// Resolve the element mapping starts from: the parsed root, or the first
/// element (pre-order, root included) whose canonical name matches an
/// explicit override.
pub(crate) fn resolve_root<'a>(
    root: &'a Element,
    name: Option<&str>,
) -> Result<&'a Element, DeserializeError> {
    let Some(name) = name else {
        return Ok(root);
    };
    let want = canonical(name);
    find_named(root, &want).ok_or_else(|| DeserializeError::missing_root(name))
}

fn find_named<'a>(node: &'a Element, want: &str) -> Option<&'a Element> {
    if canonical(&node.name) == want {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| find_named(child, want))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Culture;

    fn cx(culture: &Culture) -> Context<'_> {
        Context {
            date_format: None,
            culture,
        }
    }

    #[test]
    fn absent_and_vacant_fields_are_none() {
        let culture = Culture::invariant();
        let cx = cx(&culture);
        let node = Element::new("NullableValues")
            .with_child(Element::new("Id"))
            .with_child(Element::new("StartDate").with_attribute("status", "1"))
            .with_child(Element::new("UniqueId").with_text("d7d5c278"));

        let id: Option<i32> = Option::from_field(&node, &Field::new("id"), &cx).unwrap();
        assert_eq!(id, None);
        // Attributes alone do not make an element occupied.
        let start: Option<String> =
            Option::from_field(&node, &Field::new("start_date"), &cx).unwrap();
        assert_eq!(start, None);
        let missing: Option<i32> = Option::from_field(&node, &Field::new("missing"), &cx).unwrap();
        assert_eq!(missing, None);
        let unique: Option<String> =
            Option::from_field(&node, &Field::new("unique_id"), &cx).unwrap();
        assert_eq!(unique.as_deref(), Some("d7d5c278"));
    }

    #[test]
    fn blank_attribute_is_none_but_present_attribute_maps() {
        let culture = Culture::invariant();
        let cx = cx(&culture);
        let node = Element::new("Row")
            .with_attribute("Amount", "")
            .with_attribute("Count", "3");
        let amount: Option<f64> = Option::from_field(&node, &Field::new("amount"), &cx).unwrap();
        assert_eq!(amount, None);
        let count: Option<i32> = Option::from_field(&node, &Field::new("count"), &cx).unwrap();
        assert_eq!(count, Some(3));
    }

    #[test]
    fn root_resolution_searches_depth_first() {
        let root = Element::new("Response").with_child(
            Element::new("Body").with_child(Element::new("Calls").with_text("payload")),
        );
        assert_eq!(resolve_root(&root, None).unwrap().name, "Response");
        assert_eq!(resolve_root(&root, Some("calls")).unwrap().text, "payload");
        assert!(resolve_root(&root, Some("Missing")).is_err());
    }
}
