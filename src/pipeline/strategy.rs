//! Digest strategy trait, pipeline configuration and run statistics.

use crate::domain::fingerprint::DEFAULT_FINGERPRINT_LEN;
use crate::domain::phone::DEFAULT_PHONE_DIGITS;
use crate::error::{HasherError, HasherResult};

/// One-way digest applied to canonical values as the final stage.
///
/// Implementations must be deterministic and map the empty string to the
/// empty string, so blank values never turn into a shared constant digest.
pub trait DigestStrategy: Send + Sync {
    /// Digests `text` and returns its textual rendering.
    fn digest(&self, text: &str) -> String;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;
}

/// Tunables for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Trailing digits kept from phone numbers
    pub phone_digits: usize,

    /// Characters in the name prefix/suffix fingerprints
    pub fingerprint_len: usize,

    /// Whether the digest stage runs (false leaves canonical plaintext)
    pub digest: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            phone_digits: DEFAULT_PHONE_DIGITS,
            fingerprint_len: DEFAULT_FINGERPRINT_LEN,
            digest: true,
        }
    }
}

impl PipelineConfig {
    pub fn with_phone_digits(mut self, phone_digits: usize) -> Self {
        self.phone_digits = phone_digits;
        self
    }

    pub fn with_fingerprint_len(mut self, fingerprint_len: usize) -> Self {
        self.fingerprint_len = fingerprint_len;
        self
    }

    pub fn with_digest(mut self, digest: bool) -> Self {
        self.digest = digest;
        self
    }

    /// Rejects zero-length windows.
    pub fn validate(&self) -> HasherResult<()> {
        if self.phone_digits == 0 {
            return Err(HasherError::InvalidInput {
                parameter: "phone_digits".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.fingerprint_len == 0 {
            return Err(HasherError::InvalidInput {
                parameter: "fingerprint_len".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Statistics about a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Records read and written
    pub records_processed: usize,

    /// Non-empty values replaced by a digest
    pub fields_digested: usize,

    /// Recognized fields whose canonical form ended up empty
    pub empty_after_normalization: usize,

    /// Whether the fingerprint columns were appended to the header
    pub derived_columns_added: bool,
}

impl PipelineReport {
    /// Creates a report for a run that touched nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if any records were processed.
    pub fn has_records(&self) -> bool {
        self.records_processed > 0
    }

    /// Folds the counts of a single-record report into this one.
    pub fn absorb(&mut self, other: &PipelineReport) {
        self.records_processed += other.records_processed;
        self.fields_digested += other.fields_digested;
        self.empty_after_normalization += other.empty_after_normalization;
        self.derived_columns_added |= other.derived_columns_added;
    }
}
