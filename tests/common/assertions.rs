//! Custom assertions for hashed output tables.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// Reads an output CSV into header order plus one map per row.
pub fn read_output(path: &Path) -> Result<(Vec<String>, Vec<HashMap<String, String>>)> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: HashMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }
    Ok((headers, rows))
}

/// Returns true if `value` looks like a lowercase hex SHA-256 digest.
pub fn is_sha256_hex(value: &str) -> bool {
    value.len() == 64
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Asserts that `column` holds the digest of `canonical`.
///
/// # Panics
/// Panics if the column is missing or holds a different value.
pub fn assert_digest_of(row: &HashMap<String, String>, column: &str, canonical: &str) {
    let actual = row
        .get(column)
        .unwrap_or_else(|| panic!("Column '{}' missing from output row", column));
    let expected = org_hasher::digest(canonical);
    assert_eq!(
        actual, &expected,
        "Column '{}' should hold the digest of '{}'",
        column, canonical
    );
}

/// Asserts that no cell in the output file contains `plaintext`.
///
/// # Panics
/// Panics if the plaintext survives anywhere in the file.
pub fn assert_plaintext_absent(path: &Path, plaintext: &str) {
    let content = std::fs::read_to_string(path).expect("Failed to read output CSV");
    assert!(
        !content.contains(plaintext),
        "Plaintext '{}' should not appear in '{}'",
        plaintext,
        path.display()
    );
}
