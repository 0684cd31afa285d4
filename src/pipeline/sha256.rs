//! SHA-256 digest strategy.

use sha2::{Digest, Sha256};

use super::strategy::DigestStrategy;

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`; empty input gives `""`.
pub fn digest(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// [`DigestStrategy`] producing 256-bit SHA-256 digests as lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl Sha256Digest {
    pub fn new() -> Self {
        Self
    }
}

impl DigestStrategy for Sha256Digest {
    fn digest(&self, text: &str) -> String {
        digest(text)
    }

    fn name(&self) -> &str {
        "sha256"
    }
}
