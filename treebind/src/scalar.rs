//! Scalar value coercion: raw document text into typed destination values.
//!
//! The one rule that shapes everything here: only *absence* may be
//! defaulted. A missing node or blank text yields the type's empty value,
//! but a non-empty value that fails to parse is a hard error - it signals a
//! real document/type mismatch, not a legitimately unset field.

use crate::de::FromDocument;
use crate::error::DeserializeError;
use crate::field::{Field, Source, locate};
use crate::node::Element;
use crate::options::Context;

/// A destination type coerced from a single text value.
pub trait Scalar: Sized {
    /// Type name used in coercion errors.
    const EXPECTED: &'static str;

    /// The value representing an absent or blank source.
    fn empty() -> Self;

    /// Parse a non-empty, trimmed source text.
    fn parse_text(text: &str, cx: &Context<'_>) -> Result<Self, DeserializeError>;
}

/// Coerce an optional raw text into a scalar.
pub fn coerce<T: Scalar>(text: Option<&str>, cx: &Context<'_>) -> Result<T, DeserializeError> {
    match text {
        Some(raw) if !raw.trim().is_empty() => T::parse_text(raw.trim(), cx),
        _ => Ok(T::empty()),
    }
}

/// Map a scalar positioned directly at `node`: its text content is the value.
pub fn map_root<T: Scalar>(node: &Element, cx: &Context<'_>) -> Result<T, DeserializeError> {
    coerce(Some(node.text.as_str()), cx)
}

/// Locate and map a scalar property of `node`.
pub fn map_field<T: Scalar>(
    node: &Element,
    field: &Field,
    cx: &Context<'_>,
) -> Result<T, DeserializeError> {
    let text = match locate(node, field) {
        Some(Source::Element(el)) => Some(el.text.as_str()),
        Some(Source::Attribute(value)) => Some(value),
        None => None,
    };
    coerce(text, cx).map_err(|e| e.with_property(field.effective_name()))
}

macro_rules! integer_scalar {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            const EXPECTED: &'static str = stringify!($t);

            fn empty() -> Self {
                0
            }

            fn parse_text(text: &str, _cx: &Context<'_>) -> Result<Self, DeserializeError> {
                text.parse()
                    .map_err(|_| DeserializeError::coerce(text, Self::EXPECTED))
            }
        }
    )+}
}

integer_scalar! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
}

macro_rules! float_scalar {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            const EXPECTED: &'static str = stringify!($t);

            fn empty() -> Self {
                0.0
            }

            fn parse_text(text: &str, cx: &Context<'_>) -> Result<Self, DeserializeError> {
                cx.culture
                    .normalize_decimal(text)
                    .parse()
                    .map_err(|_| DeserializeError::coerce(text, Self::EXPECTED))
            }
        }
    )+}
}

float_scalar!(f32, f64);

impl Scalar for bool {
    const EXPECTED: &'static str = "boolean";

    fn empty() -> Self {
        false
    }

    /// `true`/`false` in any casing, or a numeric literal where zero is
    /// false and anything else is true.
    fn parse_text(text: &str, _cx: &Context<'_>) -> Result<Self, DeserializeError> {
        if text.eq_ignore_ascii_case("true") {
            return Ok(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(false);
        }
        text.parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| DeserializeError::coerce(text, Self::EXPECTED))
    }
}

impl Scalar for String {
    const EXPECTED: &'static str = "string";

    fn empty() -> Self {
        String::new()
    }

    fn parse_text(text: &str, _cx: &Context<'_>) -> Result<Self, DeserializeError> {
        Ok(text.to_string())
    }
}

impl Scalar for uuid::Uuid {
    const EXPECTED: &'static str = "GUID";

    /// An empty GUID element yields the all-zero GUID, not "no value".
    fn empty() -> Self {
        uuid::Uuid::nil()
    }

    fn parse_text(text: &str, _cx: &Context<'_>) -> Result<Self, DeserializeError> {
        uuid::Uuid::parse_str(text).map_err(|_| DeserializeError::coerce(text, Self::EXPECTED))
    }
}

impl Scalar for http::Uri {
    const EXPECTED: &'static str = "URI";

    fn empty() -> Self {
        http::Uri::default()
    }

    /// Accepts both absolute URIs and bare path references like `/foo/bar`.
    fn parse_text(text: &str, _cx: &Context<'_>) -> Result<Self, DeserializeError> {
        text.parse()
            .map_err(|_| DeserializeError::coerce(text, Self::EXPECTED))
    }
}

macro_rules! from_document_via_scalar {
    ($($t:ty,)+) => {$(
        impl FromDocument for $t {
            fn from_root(node: &Element, cx: &Context<'_>) -> Result<Self, DeserializeError> {
                map_root(node, cx)
            }

            fn from_field(
                node: &Element,
                field: &Field,
                cx: &Context<'_>,
            ) -> Result<Self, DeserializeError> {
                map_field(node, field, cx)
            }
        }
    )+}
}

from_document_via_scalar! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool,
    String,
    uuid::Uuid,
    http::Uri,
    std::time::Duration,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::FixedOffset>,
}
