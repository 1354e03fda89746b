//! Property descriptors and source-node location.
//!
//! A [`Field`] describes one mappable property of a destination type; the
//! derive macro bakes a `Field` per struct field into the generated mapping
//! code. [`locate`] finds the document node or attribute backing a field:
//! child elements are searched first, then attributes, always by
//! canonical-name equality. An explicit rename is searched exclusively -
//! it takes precedence over, and replaces, the field's own name.

use crate::naming::canonical;
use crate::node::Element;

/// Descriptor for one property of a destination type.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// The property's own name, as written in the destination type.
    pub name: &'static str,
    /// Explicit serialized-name override, searched instead of `name`.
    pub rename: Option<&'static str>,
}

impl Field {
    /// Descriptor for a field matched by its own name.
    pub const fn new(name: &'static str) -> Self {
        Field { name, rename: None }
    }

    /// Descriptor for a field with an explicit serialized-name override.
    pub const fn renamed(name: &'static str, rename: &'static str) -> Self {
        Field {
            name,
            rename: Some(rename),
        }
    }

    /// The name used for document matching.
    pub fn effective_name(&self) -> &'static str {
        match self.rename {
            Some(rename) => rename,
            None => self.name,
        }
    }
}

/// Where a field's value was found in the document.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// A matching child element.
    Element(&'a Element),
    /// A matching attribute's text on the parent node.
    Attribute(&'a str),
}

/// Find the child element or attribute backing `field` on `node`.
///
/// Element match takes precedence over attribute match; the first matching
/// sibling wins (multiplicity is the collection mapper's concern).
pub fn locate<'a>(node: &'a Element, field: &Field) -> Option<Source<'a>> {
    if let Some(child) = locate_element(node, field) {
        return Some(Source::Element(child));
    }
    let want = canonical(field.effective_name());
    node.attributes
        .iter()
        .find(|(name, _)| canonical(name) == want)
        .map(|(_, value)| Source::Attribute(value))
}

/// Element-only variant of [`locate`], used where attributes cannot carry
/// the destination shape (nested objects, collections).
pub fn locate_element<'a>(node: &'a Element, field: &Field) -> Option<&'a Element> {
    let want = canonical(field.effective_name());
    node.children
        .iter()
        .find(|child| canonical(&child.name) == want)
}
