//! Collection mapping: repeated document elements into a `Vec<T>`.
//!
//! Repetition comes in two shapes. *Wrapped*: a single child carries the
//! property name and the items sit under it. *Inline*: the items repeat
//! directly under the parent, named after the property's singular or the
//! item type. The wrapped shape wins when both could apply, since a wrapper
//! match is exact while inline matching is name-heuristic. No matching
//! elements at all is not an error - it is an empty collection.

use crate::de::FromDocument;
use crate::error::DeserializeError;
use crate::field::Field;
use crate::naming::{canonical, singularize};
use crate::node::Element;
use crate::options::Context;
use crate::tracing_macros::trace;

impl<T: FromDocument> FromDocument for Vec<T> {
    const NAME: Option<&'static str> = T::NAME;

    /// A list positioned at the node itself: the node's children are the
    /// items, matched by the item type name or the singular of the node's
    /// own name.
    fn from_root(node: &Element, cx: &Context<'_>) -> Result<Self, DeserializeError> {
        let names = item_names::<T>(&canonical(&node.name));
        map_items(matching_children(node, &names), cx)
    }

    fn from_field(
        node: &Element,
        field: &Field,
        cx: &Context<'_>,
    ) -> Result<Self, DeserializeError> {
        let property = canonical(field.effective_name());
        let attribute = |e: DeserializeError| e.with_property(field.effective_name());

        // Property-named children. Exactly one is the wrapped shape: its
        // element children are the items, and a childless wrapper is an
        // empty collection. Several are themselves the items.
        let named: Vec<&Element> = node
            .children
            .iter()
            .filter(|child| canonical(&child.name) == property)
            .collect();
        if let [wrapper] = named.as_slice() {
            trace!(property = field.effective_name(), "mapping wrapped list");
            return map_items(wrapper.children.iter().collect(), cx).map_err(attribute);
        }
        if !named.is_empty() {
            trace!(property = field.effective_name(), "mapping repeated property elements");
            return map_items(named, cx).map_err(attribute);
        }

        let names = item_names::<T>(&property);

        // Inline shape: repeated children of the node itself.
        let direct = matching_children(node, &names);
        if !direct.is_empty() {
            trace!(property = field.effective_name(), "mapping inline list");
            return map_items(direct, cx).map_err(attribute);
        }

        // Items grouped one level down, under a differently-named child.
        for child in &node.children {
            let nested = matching_children(child, &names);
            if !nested.is_empty() {
                trace!(property = field.effective_name(), "mapping nested list");
                return map_items(nested, cx).map_err(attribute);
            }
        }

        Ok(Vec::new())
    }
}

/// Canonical names an inline item may carry: the singular of the property
/// (or node) name, plus the item type's own name.
fn item_names<T: FromDocument>(property: &str) -> Vec<String> {
    let mut names = vec![singularize(property)];
    if let Some(item) = T::NAME {
        let item = canonical(item);
        if !names.contains(&item) {
            names.push(item);
        }
    }
    names
}

fn matching_children<'a>(node: &'a Element, names: &[String]) -> Vec<&'a Element> {
    node.children
        .iter()
        .filter(|child| names.contains(&canonical(&child.name)))
        .collect()
}

fn map_items<T: FromDocument>(
    items: Vec<&Element>,
    cx: &Context<'_>,
) -> Result<Vec<T>, DeserializeError> {
    items
        .into_iter()
        .map(|item| T::from_root(item, cx))
        .collect()
}
