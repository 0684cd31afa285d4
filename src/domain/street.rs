//! Street-type token removal for addresses.
//!
//! Unlike company suffixes, street types are removed anywhere in the address
//! ("main street unit 4" loses "street"). Short abbreviations such as "st" or
//! "rd" can hit unrelated tokens ("st john"); that is a known limitation and
//! the boundary rules below are kept as they are.

use super::value::{is_null_text, null_guard, NULL_VALUE};
use super::{collapse_whitespace, reduce_to_fixed_point, Canonicalizer};
use once_cell::sync::Lazy;
use regex::Regex;

/// Passes over the regex pair.
pub const MAX_REGEX_STREET_PASSES: usize = 5;

/// Passes over the literal replacement table.
pub const MAX_LITERAL_STREET_PASSES: usize = 10;

const STREET_TOKENS: [&str; 6] = ["street", "st", "avenue", "ave", "road", "rd"];

/// Token preceded by whitespace, and token at a word boundary.
///
/// A match only counts when the next character is whitespace, a comma or the
/// end of the text; see [`followed_by_delimiter`].
fn token_patterns() -> &'static [Regex; 2] {
    static PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
        [
            Regex::new(r"(?i)\s+(?:street|st\.?|avenue|ave\.?|road|rd\.?)")
                .expect("Valid street regex"),
            Regex::new(r"(?i)\b(?:street|st\.?|avenue|ave\.?|road|rd\.?)")
                .expect("Valid street regex"),
        ]
    });
    &PATTERNS
}

/// Literal forms, longest first.
fn literal_tokens() -> &'static [String] {
    static TOKENS: Lazy<Vec<String>> = Lazy::new(|| {
        let mut tokens: Vec<String> = STREET_TOKENS
            .iter()
            .flat_map(|t| [format!(" {t},"), format!(" {t}."), format!(" {t} ")])
            .collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        tokens
    });
    &TOKENS
}

fn followed_by_delimiter(rest: &str) -> bool {
    rest.chars()
        .next()
        .map_or(true, |c| c.is_whitespace() || c == ',')
}

/// Removes every delimited match of `pattern`, or `None` if nothing matched.
fn remove_delimited(pattern: &Regex, text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut changed = false;

    for m in pattern.find_iter(text) {
        if !followed_by_delimiter(&text[m.end()..]) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        last = m.end();
        changed = true;
    }

    changed.then(|| {
        out.push_str(&text[last..]);
        out
    })
}

fn strip_regex_tokens(text: &str) -> Option<String> {
    token_patterns()
        .iter()
        .find_map(|pattern| remove_delimited(pattern, text))
}

fn strip_literal_token(text: &str) -> Option<String> {
    literal_tokens()
        .iter()
        .find(|token| text.contains(token.as_str()))
        .map(|token| text.replace(token.as_str(), " "))
}

/// Removes street, avenue and road tokens (and abbreviations) from an address.
pub fn strip_street_types(text: &str) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }

    let text = text.trim().to_lowercase();
    let text = reduce_to_fixed_point(text, MAX_REGEX_STREET_PASSES, strip_regex_tokens);
    let text = reduce_to_fixed_point(text, MAX_LITERAL_STREET_PASSES, strip_literal_token);

    null_guard(collapse_whitespace(&text.replace([',', '.'], " ")))
}

/// [`Canonicalizer`] wrapper for [`strip_street_types`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StreetTypeCanonicalizer;

impl Canonicalizer for StreetTypeCanonicalizer {
    fn name(&self) -> &'static str {
        "street_type"
    }

    fn canonicalize(&self, text: &str) -> String {
        strip_street_types(text)
    }
}
