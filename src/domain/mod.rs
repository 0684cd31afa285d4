//! Text normalization rules for organization records.
//!
//! Each rule is a total `text -> text` function. The rules are composed in a
//! fixed order per field by the [`pipeline`](crate::pipeline) module so that
//! differently formatted spellings of the same entity reach the same
//! canonical form before they are digested.

pub mod company;
pub mod fingerprint;
pub mod parentheses;
pub mod phone;
pub mod street;
pub mod value;

pub use company::{strip_company_suffix, CompanySuffixCanonicalizer};
pub use fingerprint::{first_k, last_k, Fingerprint, FingerprintExtractor};
pub use parentheses::{strip_parentheses, ParentheticalStripper};
pub use phone::{last_n_digits, strip_non_digits, PhoneCanonicalizer};
pub use street::{strip_street_types, StreetTypeCanonicalizer};
pub use value::{is_empty, is_null_text, lowercase, normalize_whitespace, NULL_VALUE};

use once_cell::sync::Lazy;
use regex::Regex;

/// A single field-specific normalization rule.
pub trait Canonicalizer: Send + Sync {
    /// Short rule name used in log output.
    fn name(&self) -> &'static str;

    /// Returns the canonical form of `text`. Must be total.
    fn canonicalize(&self, text: &str) -> String;
}

/// Applies `step` until it reports no change or `cap` passes have run.
///
/// On cap exhaustion the partially reduced value is returned as-is.
pub(crate) fn reduce_to_fixed_point<F>(text: String, cap: usize, step: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut budget = cap;
    reduce_within_budget(text, &mut budget, step).0
}

/// Like [`reduce_to_fixed_point`], but draws passes from a shared budget.
///
/// Returns the reduced text and whether any pass changed it.
pub(crate) fn reduce_within_budget<F>(
    mut text: String,
    budget: &mut usize,
    mut step: F,
) -> (String, bool)
where
    F: FnMut(&str) -> Option<String>,
{
    let mut changed = false;
    while *budget > 0 {
        match step(&text) {
            Some(next) => {
                text = next;
                *budget -= 1;
                changed = true;
            }
            None => break,
        }
    }
    (text, changed)
}

/// Collapses every whitespace run to one space and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Valid regex"));
    PATTERN.replace_all(text, " ").trim().to_string()
}
