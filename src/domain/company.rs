//! Legal-entity suffix removal for organization names.
//!
//! Two end-anchored phases run in order: an exact literal table tried
//! longest-first, then a list of regular expressions that catch irregular
//! spacing and punctuation. Neither phase touches keywords in the middle of a
//! name. The phases alternate until neither changes the text, drawing from
//! separate pass budgets, so a suffix uncovered late is still removed.

use super::value::{is_null_text, null_guard, NULL_VALUE};
use super::{collapse_whitespace, reduce_within_budget, Canonicalizer};
use once_cell::sync::Lazy;
use regex::Regex;

/// Passes over the literal suffix table.
pub const MAX_LITERAL_SUFFIX_PASSES: usize = 10;

/// Passes over the regex fallback list.
pub const MAX_REGEX_SUFFIX_PASSES: usize = 5;

const PTY_FORMS: [&str; 2] = ["pty", "(pty)"];
const LTD_FORMS: [&str; 4] = ["ltd", "ldt", "(ltd)", "(ldt)"];
const SINGLE_SUFFIXES: [&str; 11] = [
    "ltd",
    "ldt",
    "pty",
    "co",
    "inc",
    "llc",
    "corp",
    "corporation",
    "limited",
    "incorporated",
    "company",
];

/// Literal suffixes, longest first.
///
/// Order matters: "pty ltd" has to be tried before "ltd" or a dangling
/// "pty" would be left behind.
fn literal_suffixes() -> &'static [String] {
    static SUFFIXES: Lazy<Vec<String>> = Lazy::new(|| {
        let mut suffixes = Vec::new();

        for pty in PTY_FORMS {
            for ltd in LTD_FORMS {
                for joiner in [" ", ""] {
                    for lead in [" ", ""] {
                        for trail in [".", ""] {
                            suffixes.push(format!("{lead}{pty}{joiner}{ltd}{trail}"));
                        }
                    }
                }
            }
        }

        for keyword in SINGLE_SUFFIXES {
            for lead in [" ", ""] {
                for trail in [".", ""] {
                    suffixes.push(format!("{lead}({keyword}){trail}"));
                }
            }
        }

        // Bare keywords need a separating space: "company" must not eat "accompany".
        for keyword in SINGLE_SUFFIXES {
            for trail in [".", ""] {
                suffixes.push(format!(" {keyword}{trail}"));
            }
        }

        suffixes.sort_by(|a, b| b.len().cmp(&a.len()));
        suffixes
    });
    &SUFFIXES
}

/// End-anchored fallback patterns, most specific first.
fn fallback_patterns() -> &'static [Regex] {
    static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?i)\s*\(?\s*pty\s*\)?\s*\(?\s*(ltd|ldt)\s*\)?\s*\.?\s*$",
            r"(?i)\s*\(?\s*pty\s*\)?\s*(ltd|ldt)\s*\.?\s*$",
            r"(?i)\s*pty\s*\(?\s*(ltd|ldt)\s*\)?\s*\.?\s*$",
            r"(?i)\s*ptyltd\s*\.?\s*$",
            r"(?i)\s*ptyldt\s*\.?\s*$",
            r"(?i)\s+\(?\s*pty\s*\)?\s*\.?\s*$",
            r"(?i)\s*\(?\s*pty\s*\)?\s*$",
            r"(?i)\s+pty\s*\.?\s*$",
            r"(?i)\s*pty\s*\.?\s*$",
            r"(?i)\s+\(?\s*(ltd|ldt|limited|co|inc|llc|corp|corporation|incorporated|company)\s*\)?\s*\.?\s*$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Valid suffix regex"))
        .collect()
    });
    &PATTERNS
}

fn is_edge_punctuation(c: char) -> bool {
    matches!(c, ' ' | '.' | ',' | ';' | ':')
}

/// Drops whitespace and separator punctuation left dangling at the end.
fn trim_trailing(text: &str) -> String {
    text.trim().trim_end_matches(is_edge_punctuation).to_string()
}

/// Cuts the first (longest) matching literal suffix off the end.
fn strip_literal_suffix(text: &str) -> Option<String> {
    literal_suffixes()
        .iter()
        .find(|suffix| text.ends_with(suffix.as_str()))
        .map(|suffix| trim_trailing(&text[..text.len() - suffix.len()]))
}

/// Applies the first fallback pattern that changes the text.
fn strip_fallback_suffix(text: &str) -> Option<String> {
    fallback_patterns().iter().find_map(|pattern| {
        let next = trim_trailing(&pattern.replace(text, ""));
        (next != text).then_some(next)
    })
}

/// Strips trailing legal-entity suffixes such as "(Pty) Ltd" or "Inc.".
pub fn strip_company_suffix(text: &str) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }

    let mut text = trim_trailing(&collapse_whitespace(&text.to_lowercase()));
    let mut literal_budget = MAX_LITERAL_SUFFIX_PASSES;
    let mut regex_budget = MAX_REGEX_SUFFIX_PASSES;

    loop {
        let (next, literal_changed) =
            reduce_within_budget(text, &mut literal_budget, strip_literal_suffix);
        let (next, regex_changed) =
            reduce_within_budget(next, &mut regex_budget, strip_fallback_suffix);
        text = next;
        if !literal_changed && !regex_changed {
            break;
        }
    }

    null_guard(text.trim_matches(is_edge_punctuation).to_string())
}

/// [`Canonicalizer`] wrapper for [`strip_company_suffix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanySuffixCanonicalizer;

impl Canonicalizer for CompanySuffixCanonicalizer {
    fn name(&self) -> &'static str {
        "company_suffix"
    }

    fn canonicalize(&self, text: &str) -> String {
        strip_company_suffix(text)
    }
}
