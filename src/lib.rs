//! Normalization and pseudonymization of organization records.
//!
//! This library reads a CSV of organization records, canonicalizes the
//! identifying fields so that differently formatted spellings of the same
//! entity agree, and replaces them with SHA-256 digests. Name prefix/suffix
//! fingerprints are digested alongside so records can still be matched
//! approximately without revealing the name.
//!
//! # Features
//!
//! - **Name canonicalization**: parenthetical annotations and legal-entity
//!   suffixes such as "(Pty) Ltd" are removed
//! - **Address canonicalization**: street-type tokens are removed anywhere
//! - **Phone canonicalization**: digits only, trailing nine kept
//! - **Fingerprints**: first/last five characters of the canonical name
//! - **Digests**: lowercase hex SHA-256, empty values stay empty
//!
//! # Architecture
//!
//! - [`domain`]: the normalization rules
//! - [`record`]: records, recognized fields and record sets
//! - [`pipeline`]: rule ordering, digest strategies and the service layer
//! - [`table`]: CSV input and output
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use org_hasher::{PipelineService, TableOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = PipelineService::with_sha256();
//!
//! service.run(
//!     Path::new("input.csv"),
//!     Path::new("output-hashed.csv"),
//!     &TableOptions::default(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ```
//! use org_hasher::domain::{strip_company_suffix, strip_street_types};
//!
//! assert_eq!(strip_company_suffix("Acme (Pty) Ltd"), "acme");
//! assert_eq!(strip_street_types("123 Main Street Unit 4"), "123 main unit 4");
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod table;

// Re-exports for convenient access
pub use domain::{
    first_k, is_empty, last_k, last_n_digits, lowercase, normalize_whitespace,
    strip_company_suffix, strip_non_digits, strip_parentheses, strip_street_types, Canonicalizer,
};
pub use error::{HasherError, HasherResult};
pub use pipeline::{
    digest, DigestStrategy, PipelineConfig, PipelineReport, PipelineService, Sha256Digest,
};
pub use record::{Field, Record, RecordSet};
pub use table::{read_records, read_records_from, write_records, write_records_to, TableOptions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = PipelineService::with_sha256();
        assert_eq!(service.strategy_name(), "sha256");
    }

    #[test]
    fn test_rule_reexports() {
        assert_eq!(last_n_digits(&strip_non_digits("+27 (0)82-555-1234"), 9), "825551234");
        assert_eq!(first_k("ab", 5), last_k("ab", 5));
    }
}
