//! Error types for document deserialization.

use std::error::Error;
use std::fmt::{self, Display};

/// Error type for deserialization.
#[derive(Debug)]
pub struct DeserializeError {
    kind: DeserializeErrorKind,
}

impl DeserializeError {
    /// Returns a reference to the error kind for detailed inspection.
    pub fn kind(&self) -> &DeserializeErrorKind {
        &self.kind
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        DeserializeError {
            kind: DeserializeErrorKind::Parse(message.into()),
        }
    }

    pub(crate) fn unexpected_eof() -> Self {
        DeserializeError {
            kind: DeserializeErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn missing_root(name: impl Into<String>) -> Self {
        DeserializeError {
            kind: DeserializeErrorKind::MissingRoot(name.into()),
        }
    }

    /// A non-empty source value that could not be converted into the
    /// destination scalar type.
    pub fn coerce(value: impl Into<String>, expected: &'static str) -> Self {
        DeserializeError {
            kind: DeserializeErrorKind::Coerce {
                value: value.into(),
                expected,
                property: None,
            },
        }
    }

    /// Attach the offending property name to a coercion error, if not
    /// already known.
    pub fn with_property(mut self, name: &str) -> Self {
        if let DeserializeErrorKind::Coerce { property, .. } = &mut self.kind {
            if property.is_none() {
                *property = Some(name.to_string());
            }
        }
        self
    }
}

/// Detailed classification of deserialization errors.
#[derive(Debug)]
#[non_exhaustive]
pub enum DeserializeErrorKind {
    /// The input is not well-formed markup.
    Parse(String),
    /// The input ended before the document root was closed.
    UnexpectedEof,
    /// The configured root element override matched no node.
    MissingRoot(String),
    /// A non-empty value failed conversion to the destination type.
    Coerce {
        /// The offending source text.
        value: String,
        /// The destination type the text was coerced towards.
        expected: &'static str,
        /// The destination property, once known.
        property: Option<String>,
    },
}

impl Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeserializeErrorKind::Parse(message) => write!(f, "XML parse error: {message}"),
            DeserializeErrorKind::UnexpectedEof => write!(f, "unexpected end of XML input"),
            DeserializeErrorKind::MissingRoot(name) => {
                write!(f, "no element matching root override '{name}'")
            }
            DeserializeErrorKind::Coerce {
                value,
                expected,
                property,
            } => {
                write!(f, "cannot convert '{value}' into {expected}")?;
                if let Some(property) = property {
                    write!(f, " for property '{property}'")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for DeserializeError {}
