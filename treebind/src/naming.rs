//! Name conversion utilities for document-to-property matching.
//!
//! Documents in the wild disagree with Rust identifiers about casing and word
//! separators: the same logical property shows up as `StartDate`,
//! `Start_Date`, `start-date` or `START_DATE`. All matching in this crate
//! therefore goes through [`canonical`], which folds ASCII case and strips
//! `_` and `-`. Two names match iff their canonical forms are equal.

/// Canonical form of a document or property name: ASCII-lowercased with `_`
/// and `-` removed.
pub fn canonical(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Irregular plural → singular mappings, sorted by plural for binary search.
///
/// Only the irregulars that plausibly occur as collection property names are
/// carried; everything else goes through the suffix rules.
static IRREGULARS: &[(&str, &str)] = &[
    ("children", "child"),
    ("entries", "entry"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("people", "person"),
    ("statuses", "status"),
    ("vertices", "vertex"),
];

/// Convert a plural English word to its singular form.
///
/// Used by the collection mapper to match inline items against the
/// singularized collection property name (`images` → `image`). The input is
/// expected to be in canonical form already.
pub fn singularize(word: &str) -> String {
    if let Ok(idx) = IRREGULARS.binary_search_by_key(&word, |&(plural, _)| plural) {
        return String::from(IRREGULARS[idx].1);
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }

    // boxes -> box, classes -> class, dishes -> dish
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ss")
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return String::from(stem);
        }
    }

    if let Some(stem) = word.strip_suffix('s') {
        if !stem.is_empty() && !stem.ends_with('s') {
            return String::from(stem);
        }
    }

    String::from(word)
}
