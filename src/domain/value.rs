//! Null classification and the generic whitespace/case pass.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical representation of a missing value.
pub const NULL_VALUE: &str = "";

/// Literal produced when an upstream tool stringifies a null marker.
const NAN_LITERAL: &str = "nan";

/// Returns true if `value` is absent or its text is the `"nan"` literal.
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, is_null_text)
}

/// Returns true if present text is a stringified null marker.
pub fn is_null_text(text: &str) -> bool {
    text == NAN_LITERAL
}

/// Maps null-like text to [`NULL_VALUE`], leaving everything else untouched.
pub(crate) fn null_guard(text: String) -> String {
    if is_null_text(&text) {
        NULL_VALUE.to_string()
    } else {
        text
    }
}

/// Trims the ends and collapses runs of spaces to a single space.
///
/// Only the space character is collapsed internally; tabs and newlines inside
/// the value are kept.
pub fn normalize_whitespace(text: &str) -> String {
    static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("Valid regex"));

    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }
    null_guard(SPACES.replace_all(text.trim(), " ").into_owned())
}

/// Lowercases text. Null-like input maps to the empty string.
pub fn lowercase(text: &str) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }
    null_guard(text.to_lowercase())
}

/// Runs the generic pass every field receives: whitespace then case.
pub fn normalize_generic(value: Option<&str>) -> String {
    match value {
        Some(text) if !is_empty(value) => lowercase(&normalize_whitespace(text)),
        _ => NULL_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some("nan")));
        assert!(!is_empty(Some("NaN")));
        assert!(!is_empty(Some("")));
        assert!(!is_empty(Some("acme")));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Acme    Trading  "), "Acme Trading");
        assert_eq!(normalize_whitespace("a\t\tb"), "a\t\tb");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace(" nan "), "");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(lowercase("ACME Ltd"), "acme ltd");
        assert_eq!(lowercase("NAN"), "");
        assert_eq!(lowercase(""), "");
        assert_eq!(lowercase("ÉCOLE"), "école");
    }

    #[test]
    fn test_normalize_generic() {
        assert_eq!(normalize_generic(Some("  Foo   BAR ")), "foo bar");
        assert_eq!(normalize_generic(None), "");
        assert_eq!(normalize_generic(Some("nan")), "");
        assert_eq!(normalize_generic(Some("  NaN")), "");
    }
}
