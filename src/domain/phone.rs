//! Phone number canonicalization.
//!
//! Phone numbers are reduced to their digits and then to a fixed-length
//! trailing window. International prefixes and trunk zeros are the variable
//! part of a number; the trailing subscriber digits are what stays stable:
//! - +27 (0)82-555-1234
//! - 082 555 1234
//! - 27825551234
//!
//! all canonicalize to `825551234`.

use super::value::{is_null_text, NULL_VALUE};
use super::Canonicalizer;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default length of the trailing digit window.
pub const DEFAULT_PHONE_DIGITS: usize = 9;

fn non_digit() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^0-9]").expect("Valid non-digit regex"));
    &PATTERN
}

/// Removes every character that is not an ASCII decimal digit.
pub fn strip_non_digits(text: &str) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }
    non_digit().replace_all(text, "").into_owned()
}

/// Returns the trailing `n` characters, or the text unchanged if shorter.
pub fn last_n_digits(text: &str, n: usize) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }

    let len = text.chars().count();
    if len >= n {
        text.chars().skip(len - n).collect()
    } else {
        text.to_string()
    }
}

/// Digit stripping followed by the trailing window.
#[derive(Debug, Clone, Copy)]
pub struct PhoneCanonicalizer {
    digits: usize,
}

impl PhoneCanonicalizer {
    /// Creates a canonicalizer keeping the default nine trailing digits.
    pub fn new() -> Self {
        Self {
            digits: DEFAULT_PHONE_DIGITS,
        }
    }

    /// Sets the length of the trailing digit window.
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    pub fn digits(&self) -> usize {
        self.digits
    }
}

impl Default for PhoneCanonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canonicalizer for PhoneCanonicalizer {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn canonicalize(&self, text: &str) -> String {
        last_n_digits(&strip_non_digits(text), self.digits)
    }
}
