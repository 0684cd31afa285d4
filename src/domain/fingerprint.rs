//! Prefix/suffix fingerprints of canonical organization names.
//!
//! The fragments are digested separately from the full name so that records
//! can be blocked on a shared prefix or suffix without exposing the name.

use super::value::{is_null_text, NULL_VALUE};

/// Default fragment length in characters.
pub const DEFAULT_FINGERPRINT_LEN: usize = 5;

/// Leading `k` characters, or the whole text if shorter.
pub fn first_k(text: &str, k: usize) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }
    text.chars().take(k).collect()
}

/// Trailing `k` characters, or the whole text if shorter.
pub fn last_k(text: &str, k: usize) -> String {
    if is_null_text(text) {
        return NULL_VALUE.to_string();
    }
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(k)).collect()
}

/// Prefix and suffix fragments of one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Copy)]
pub struct FingerprintExtractor {
    len: usize,
}

impl FingerprintExtractor {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Extracts both fragments from an already canonical name.
    pub fn extract(&self, canonical_name: &str) -> Fingerprint {
        Fingerprint {
            first: first_k(canonical_name, self.len),
            last: last_k(canonical_name, self.len),
        }
    }
}

impl Default for FingerprintExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FINGERPRINT_LEN)
    }
}
