//! Per-record orchestration of the normalization rules and the digest stage.
//!
//! Every field first receives the generic whitespace/case pass. Recognized
//! fields then run their own rule chain, `Org Name` yields the fingerprint
//! columns, null-like values are swept to the empty string, and finally the
//! digest strategy replaces the recognized columns in place.

pub mod sha256;
pub mod strategy;

pub use sha256::{digest, Sha256Digest};
pub use strategy::{DigestStrategy, PipelineConfig, PipelineReport};

use std::path::Path;

use tracing::{debug, info};

use crate::domain::value::{is_empty, normalize_generic, null_guard, NULL_VALUE};
use crate::domain::{
    Canonicalizer, CompanySuffixCanonicalizer, FingerprintExtractor, ParentheticalStripper,
    PhoneCanonicalizer, StreetTypeCanonicalizer,
};
use crate::error::HasherResult;
use crate::record::{Field, Record, RecordSet};
use crate::table::{self, TableOptions};

/// Ordered rules for one recognized field.
struct FieldRules {
    field: Field,
    rules: Vec<Box<dyn Canonicalizer>>,
}

impl FieldRules {
    fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |current, rule| {
            null_guard(rule.canonicalize(&current))
        })
    }
}

/// Builds the field-specific chains, in the order they run.
fn field_rules(config: &PipelineConfig) -> Vec<FieldRules> {
    vec![
        FieldRules {
            field: Field::OrgName,
            // Suffix stripping twice: the first pass can expose another suffix.
            rules: vec![
                Box::new(ParentheticalStripper),
                Box::new(CompanySuffixCanonicalizer),
                Box::new(CompanySuffixCanonicalizer),
            ],
        },
        FieldRules {
            field: Field::OrgAddress,
            rules: vec![Box::new(StreetTypeCanonicalizer)],
        },
        FieldRules {
            field: Field::PhoneNumber,
            rules: vec![Box::new(
                PhoneCanonicalizer::new().with_digits(config.phone_digits),
            )],
        },
    ]
}

/// Pipeline service coordinating normalization and digest execution.
pub struct PipelineService {
    strategy: Box<dyn DigestStrategy>,
    config: PipelineConfig,
    chains: Vec<FieldRules>,
    fingerprints: FingerprintExtractor,
}

impl PipelineService {
    /// Creates a new pipeline service with the given digest strategy.
    pub fn new(strategy: Box<dyn DigestStrategy>, config: PipelineConfig) -> Self {
        Self {
            strategy,
            chains: field_rules(&config),
            fingerprints: FingerprintExtractor::new(config.fingerprint_len),
            config,
        }
    }

    /// Creates a service digesting with SHA-256 and default settings.
    pub fn with_sha256() -> Self {
        Self::new(Box::new(Sha256Digest::new()), PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Runs every stage on one record in place.
    pub fn process_record(&self, record: &mut Record) -> PipelineReport {
        let mut report = PipelineReport {
            records_processed: 1,
            ..Default::default()
        };

        for value in record.values_mut() {
            *value = Some(normalize_generic(value.as_deref()));
        }

        for chain in &self.chains {
            let name = chain.field.column_name();
            if !record.has_field(name) {
                continue;
            }
            let canonical = chain.apply(record.get(name).unwrap_or(NULL_VALUE));

            if chain.field == Field::OrgName {
                let fingerprint = self.fingerprints.extract(&canonical);
                record.set(Field::OrgNameFirst5.column_name(), Some(fingerprint.first));
                record.set(Field::OrgNameLast5.column_name(), Some(fingerprint.last));
            }
            record.set(name, Some(canonical));
        }

        for value in record.values_mut() {
            if is_empty(value.as_deref()) {
                *value = Some(NULL_VALUE.to_string());
            }
        }

        for field in Field::DIGESTED {
            let name = field.column_name();
            let Some(canonical) = record.get(name) else {
                continue;
            };
            if canonical.is_empty() {
                report.empty_after_normalization += 1;
                continue;
            }
            if self.config.digest {
                let hashed = self.strategy.digest(canonical);
                record.set(name, Some(hashed));
                report.fields_digested += 1;
            }
        }

        report
    }

    /// Processes a whole record set, appending fingerprint columns when
    /// `Org Name` is present.
    pub fn process(&self, mut set: RecordSet) -> (RecordSet, PipelineReport) {
        let mut report = PipelineReport::none();

        if set.has_column(Field::OrgName.column_name()) {
            let first = set.add_column(Field::OrgNameFirst5.column_name());
            let last = set.add_column(Field::OrgNameLast5.column_name());
            report.derived_columns_added = first || last;
        }

        for record in set.records_mut() {
            let record_report = self.process_record(record);
            report.absorb(&record_report);
        }

        debug!(
            records = report.records_processed,
            digested = report.fields_digested,
            empty = report.empty_after_normalization,
            "Processed record set"
        );
        (set, report)
    }

    /// Reads `input`, processes every record and writes `output`.
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        options: &TableOptions,
    ) -> HasherResult<PipelineReport> {
        self.config.validate()?;

        let set = table::read_records(input, options)?;
        info!(
            input = %input.display(),
            records = set.len(),
            columns = set.columns().len(),
            "Loaded input table"
        );

        let recognized: Vec<&str> = set
            .columns()
            .iter()
            .filter(|c| Field::from_column(c).is_some())
            .map(String::as_str)
            .collect();
        debug!(columns = ?recognized, strategy = self.strategy.name(), "Recognized columns");

        let (set, report) = self.process(set);
        table::write_records(output, &set)?;

        info!(
            output = %output.display(),
            records = report.records_processed,
            digested = report.fields_digested,
            "Wrote output table"
        );
        Ok(report)
    }
}

impl Default for PipelineService {
    fn default() -> Self {
        Self::with_sha256()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(pairs.iter().map(|(k, v)| (*k, Some(v.to_string()))))
    }

    fn canonical_service() -> PipelineService {
        PipelineService::new(
            Box::new(Sha256Digest::new()),
            PipelineConfig::default().with_digest(false),
        )
    }

    #[test]
    fn test_canonical_forms() {
        let mut rec = record(&[
            ("Org Name", "Acme (Pty) Ltd."),
            ("Org Address", "12 Main Street"),
            ("Phone Number", "+27 82 555 1234"),
            ("Company Email", " A@B.com "),
        ]);
        canonical_service().process_record(&mut rec);

        assert_eq!(rec.get("Org Name"), Some("acme"));
        assert_eq!(rec.get("Org Address"), Some("12 main"));
        assert_eq!(rec.get("Phone Number"), Some("825551234"));
        assert_eq!(rec.get("Company Email"), Some("a@b.com"));
        assert_eq!(rec.get("Org Name First 5 Letters"), Some("acme"));
        assert_eq!(rec.get("Org Name Last 5 Characters"), Some("acme"));
    }

    #[test]
    fn test_digests_replace_values() {
        let mut rec = record(&[("Org Name", "Acme Ltd"), ("Notes", "Keep ME")]);
        let report = PipelineService::with_sha256().process_record(&mut rec);

        let acme = "822b33ad87c148a0a20a5ba7cd5ebcaa68d36a18e7aad165554903f52ca82757";
        assert_eq!(rec.get("Org Name"), Some(acme));
        assert_eq!(rec.get("Org Name First 5 Letters"), Some(acme));
        assert_eq!(rec.get("Org Name Last 5 Characters"), Some(acme));
        assert_eq!(rec.get("Notes"), Some("keep me"));
        assert_eq!(report.fields_digested, 3);
    }

    #[test]
    fn test_absent_fields_skip_their_stages() {
        let mut rec = record(&[("Org Address", "1 Long Road")]);
        canonical_service().process_record(&mut rec);
        assert!(!rec.has_field("Org Name First 5 Letters"));
        assert_eq!(rec.get("Org Address"), Some("1 long"));
    }

    #[test]
    fn test_null_values_stay_empty() {
        let mut rec = Record::from_pairs([
            ("Org Name", None),
            ("Phone Number", Some("nan".to_string())),
            ("Company Website", Some("  ".to_string())),
        ]);
        let report = PipelineService::with_sha256().process_record(&mut rec);

        assert_eq!(rec.get("Org Name"), Some(""));
        assert_eq!(rec.get("Phone Number"), Some(""));
        assert_eq!(rec.get("Company Website"), Some(""));
        assert_eq!(rec.get("Org Name First 5 Letters"), Some(""));
        assert_eq!(report.fields_digested, 0);
        assert_eq!(report.empty_after_normalization, 5);
    }

    #[test]
    fn test_name_reducing_to_nan_is_null() {
        let mut rec = record(&[("Org Name", "NAN (Pty) Ltd")]);
        canonical_service().process_record(&mut rec);
        assert_eq!(rec.get("Org Name"), Some(""));
        assert_eq!(rec.get("Org Name Last 5 Characters"), Some(""));
    }

    #[test]
    fn test_process_appends_derived_columns() {
        let mut set = RecordSet::new(vec!["Org Name".to_string(), "Other".to_string()]);
        set.push_row(vec![Some("Widget Inc".to_string()), None]);

        let (set, report) = canonical_service().process(set);
        assert_eq!(
            set.columns(),
            &[
                "Org Name",
                "Other",
                "Org Name First 5 Letters",
                "Org Name Last 5 Characters"
            ]
        );
        assert!(report.derived_columns_added);
        assert_eq!(report.records_processed, 1);
        assert_eq!(set.records()[0].get("Org Name First 5 Letters"), Some("widge"));
        assert_eq!(set.records()[0].get("Org Name Last 5 Characters"), Some("idget"));
    }

    #[test]
    fn test_custom_config_windows() {
        let service = PipelineService::new(
            Box::new(Sha256Digest::new()),
            PipelineConfig::default()
                .with_digest(false)
                .with_phone_digits(4)
                .with_fingerprint_len(2),
        );
        let mut rec = record(&[("Org Name", "Acme"), ("Phone Number", "555-1234")]);
        service.process_record(&mut rec);
        assert_eq!(rec.get("Phone Number"), Some("1234"));
        assert_eq!(rec.get("Org Name First 5 Letters"), Some("ac"));
        assert_eq!(rec.get("Org Name Last 5 Characters"), Some("me"));
    }
}
