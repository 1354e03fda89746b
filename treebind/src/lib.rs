//! Structural XML deserialization for loosely-schema'd documents.
//!
//! `treebind` maps XML payloads onto plain Rust types by *shape*, not by a
//! schema: property names match their source elements case-insensitively
//! and ignoring `_`/`-` separators, values may arrive as child elements or
//! attributes, and repeated elements collect into `Vec`s whether or not a
//! wrapper element groups them. Missing and blank values take the
//! destination type's empty value (or `None` for `Option` fields), while a
//! non-empty value that fails to parse is a hard error.
//!
//! # Example
//!
//! ```
//! use treebind::FromDocument;
//!
//! #[derive(FromDocument, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     nick_name: Option<String>,
//! }
//!
//! let xml = r#"<Person Age="30"><Name>Alice</Name></Person>"#;
//! let person: Person = treebind::from_str(xml).unwrap();
//! assert_eq!(
//!     person,
//!     Person {
//!         name: "Alice".into(),
//!         age: 30,
//!         nick_name: None,
//!     }
//! );
//! ```
//!
//! Per-call configuration (an alternate mapping root, an exact date format,
//! locale conventions) goes through [`Deserializer`].
#![deny(unsafe_code)]

mod collection;
mod de;
mod error;
mod field;
pub mod naming;
mod node;
mod options;
mod parser;
pub mod scalar;
mod time;
mod tracing_macros;

pub use de::FromDocument;
pub use error::{DeserializeError, DeserializeErrorKind};
pub use field::{Field, Source, locate, locate_element};
pub use node::Element;
pub use options::{Context, Culture};
pub use parser::parse;
pub use scalar::Scalar;

#[cfg(feature = "derive")]
pub use treebind_derive::FromDocument;

use crate::tracing_macros::trace_span;

/// Deserialize a value from an XML string with the default configuration.
///
/// Mapping starts at the document root. For an alternate starting element,
/// a custom date format, or non-invariant culture conventions, use
/// [`Deserializer`].
pub fn from_str<T: FromDocument>(input: &str) -> Result<T, DeserializeError> {
    Deserializer::new().deserialize(input)
}

/// A configured deserializer.
///
/// One `Deserializer` can serve any number of calls; configuration is
/// read-only during a call.
///
/// ```
/// use treebind::{Deserializer, FromDocument};
///
/// #[derive(FromDocument)]
/// struct Call {
///     sid: String,
/// }
///
/// let xml = r#"<Response><Calls><Call><Sid>CA123</Sid></Call></Calls></Response>"#;
/// let calls: Vec<Call> = Deserializer::new()
///     .root_element("Calls")
///     .deserialize(xml)
///     .unwrap();
/// assert_eq!(calls[0].sid, "CA123");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Deserializer {
    root_element: Option<String>,
    date_format: Option<String>,
    culture: Culture,
}

impl Deserializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start mapping at the first element with this name (matched
    /// canonically, document root included) instead of the root itself.
    pub fn root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = Some(name.into());
        self
    }

    /// Parse date/time values with exactly this pattern (chrono strftime
    /// syntax), replacing the culture's general patterns.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Locale conventions for numeric and date/time coercion.
    pub fn culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    /// Parse `input` and map it onto `T`.
    pub fn deserialize<T: FromDocument>(&self, input: &str) -> Result<T, DeserializeError> {
        trace_span!("deserialize");
        let document = parser::parse(input)?;
        let root = de::resolve_root(&document, self.root_element.as_deref())?;
        let cx = Context {
            date_format: self.date_format.as_deref(),
            culture: &self.culture,
        };
        T::from_root(root, &cx)
    }
}
