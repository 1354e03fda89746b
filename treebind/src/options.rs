//! Per-call configuration: culture and the deserialization context.

/// Locale conventions used for scalar coercion.
///
/// Governs how decimal numbers and general (non-explicit-format) date/time
/// values parse. The invariant culture matches the untagged formats that
/// machine-generated XML overwhelmingly uses.
#[derive(Debug, Clone)]
pub struct Culture {
    /// Character separating the integer and fractional parts of a decimal.
    pub decimal_separator: char,
    /// Digit-grouping character, stripped before numeric parsing.
    pub group_separator: char,
    /// Patterns tried in order for general date/time parsing
    /// (chrono strftime syntax).
    pub datetime_formats: Vec<String>,
    /// Patterns tried for date-only values; the time defaults to midnight.
    pub date_formats: Vec<String>,
}

impl Culture {
    /// The culture-neutral conventions: `.` decimal point, ISO-8601 and
    /// `MM/dd/yyyy` date shapes.
    pub fn invariant() -> Self {
        Culture {
            decimal_separator: '.',
            group_separator: ',',
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%m/%d/%Y %H:%M:%S".to_string(),
                "%m/%d/%Y %I:%M:%S %p".to_string(),
            ],
            date_formats: vec!["%Y-%m-%d".to_string(), "%m/%d/%Y".to_string()],
        }
    }

    /// Rewrite a culture-specific decimal literal into the `.`-separated form
    /// the Rust float parsers expect. Group separators are dropped.
    pub fn normalize_decimal(&self, text: &str) -> String {
        text.chars()
            .filter(|c| *c != self.group_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect()
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::invariant()
    }
}

/// Per-call view of the deserializer configuration, threaded through the
/// whole mapping walk. Immutable for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Exact date/time parse pattern; when unset, the culture's general
    /// patterns are tried instead.
    pub date_format: Option<&'a str>,
    /// Locale conventions for numeric and date/time parsing.
    pub culture: &'a Culture,
}
