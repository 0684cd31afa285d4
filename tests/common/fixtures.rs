//! Test fixtures and CSV builders.
//!
//! Provides a builder for creating input tables with specific content,
//! following the Builder pattern for clean test setup.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Builder for creating test CSV files with custom content.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let csv = TestCsvBuilder::new()
///     .with_columns(&["Org Name", "Phone Number"])
///     .with_row(&["Acme (Pty) Ltd", "+27 82 555 1234"])
///     .build(Path::new("/tmp/input.csv"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestCsvBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TestCsvBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header row.
    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Adds a data row. Short rows are written as-is.
    pub fn with_row(mut self, values: &[&str]) -> Self {
        self.rows.push(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Renders the table as CSV text.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Builds the CSV and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        std::fs::write(output_path, self.to_csv()?)?;
        Ok(output_path.to_path_buf())
    }
}

/// Quick helper for the standard five recognized columns.
pub fn create_org_table(path: &Path, rows: &[[&str; 5]]) -> Result<PathBuf> {
    let mut builder = TestCsvBuilder::new().with_columns(&[
        "Org Name",
        "Org Address",
        "Phone Number",
        "Company Email",
        "Company Website",
    ]);

    for row in rows {
        builder = builder.with_row(row);
    }

    builder.build(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_quotes_commas() -> Result<()> {
        let csv = TestCsvBuilder::new()
            .with_columns(&["Org Address"])
            .with_row(&["5 Long Rd, Cape Town"])
            .to_csv()?;
        assert_eq!(csv, "Org Address\n\"5 Long Rd, Cape Town\"\n");
        Ok(())
    }
}
