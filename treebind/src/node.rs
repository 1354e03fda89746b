//! Raw document node types - represent arbitrary XML without a schema.

/// One element of a parsed document tree.
///
/// Names are kept exactly as they appear in the document; normalization
/// happens at lookup time (see [`crate::naming::canonical`]), so the same
/// node can be matched against several candidate property names without
/// mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// The element's tag name, with any namespace prefix stripped.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Direct text content, concatenated across text nodes.
    pub text: String,
}

impl Element {
    /// Create a new element with just a tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the direct text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Get an attribute value by exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether this element carries no value of its own: no children and no
    /// non-blank text. Attributes are deliberately ignored - an empty
    /// `<Id SomeAttribute="..."/>` still counts as vacant.
    pub fn is_vacant(&self) -> bool {
        self.children.is_empty() && self.text.trim().is_empty()
    }
}
