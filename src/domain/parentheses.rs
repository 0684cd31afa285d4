//! Removal of parenthetical annotations from organization names.

use super::value::{is_null_text, null_guard, NULL_VALUE};
use super::{collapse_whitespace, reduce_to_fixed_point, Canonicalizer};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Maximum number of nesting levels peeled off.
pub const MAX_PARENTHESIS_PASSES: usize = 10;

/// Matches one innermost balanced group.
fn innermost_group() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^()]*\)").expect("Valid regex"));
    &PATTERN
}

/// Removes `(...)` groups, innermost first, then collapses whitespace.
///
/// Each pass removes one nesting level. Unbalanced parentheses are left in
/// place. The result is lowercased so the rule is idempotent on its own.
pub fn strip_parentheses(text: &str) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }

    let reduced = reduce_to_fixed_point(text.to_lowercase(), MAX_PARENTHESIS_PASSES, |t| {
        match innermost_group().replace_all(t, "") {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        }
    });

    null_guard(collapse_whitespace(&reduced))
}

/// [`Canonicalizer`] wrapper for [`strip_parentheses`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentheticalStripper;

impl Canonicalizer for ParentheticalStripper {
    fn name(&self) -> &'static str {
        "parentheses"
    }

    fn canonicalize(&self, text: &str) -> String {
        strip_parentheses(text)
    }
}
