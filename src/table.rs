//! CSV reading and writing at the edge of the pipeline.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{HasherError, HasherResult};
use crate::record::RecordSet;

/// Cell texts read as missing values, matching the usual CSV loader defaults.
pub const NULL_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Label used in errors for tables that do not come from a file.
const STREAM_LABEL: &str = "<stream>";

/// Options for reading a table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    /// Keep null-marker texts such as `NA` as literal values.
    pub keep_na_markers: bool,
}

impl TableOptions {
    pub fn with_keep_na_markers(mut self, keep: bool) -> Self {
        self.keep_na_markers = keep;
        self
    }

    fn cell_value(&self, cell: &str) -> Option<String> {
        let is_marker = if self.keep_na_markers {
            cell.is_empty()
        } else {
            NULL_MARKERS.contains(&cell)
        };
        (!is_marker).then(|| cell.to_string())
    }
}

/// Reads a headed CSV file into a [`RecordSet`].
pub fn read_records(path: &Path, options: &TableOptions) -> HasherResult<RecordSet> {
    let file = File::open(path).map_err(|e| HasherError::io(path, e))?;
    parse_records(BufReader::new(file), path, options)
}

/// Reads a headed CSV table from any reader.
pub fn read_records_from<R: Read>(reader: R, options: &TableOptions) -> HasherResult<RecordSet> {
    parse_records(reader, Path::new(STREAM_LABEL), options)
}

fn parse_records<R: Read>(
    reader: R,
    label: &Path,
    options: &TableOptions,
) -> HasherResult<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| HasherError::csv(label, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if columns.is_empty() {
        return Err(HasherError::MissingHeader {
            path: label.to_path_buf(),
        });
    }

    let mut set = RecordSet::new(columns);
    for row in reader.records() {
        let row = row.map_err(|e| HasherError::csv(label, e))?;
        set.push_row(row.iter().map(|cell| options.cell_value(cell)).collect());
    }

    debug!(
        source = %label.display(),
        columns = set.columns().len(),
        records = set.len(),
        "Read table"
    );
    Ok(set)
}

/// Writes a [`RecordSet`] as CSV, absent values as empty cells.
pub fn write_records(path: &Path, set: &RecordSet) -> HasherResult<()> {
    let file = File::create(path).map_err(|e| HasherError::io(path, e))?;
    emit_records(BufWriter::new(file), path, set)
}

/// Writes a [`RecordSet`] as CSV to any writer.
pub fn write_records_to<W: Write>(writer: W, set: &RecordSet) -> HasherResult<()> {
    emit_records(writer, Path::new(STREAM_LABEL), set)
}

fn emit_records<W: Write>(writer: W, label: &Path, set: &RecordSet) -> HasherResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(set.columns())
        .map_err(|e| HasherError::csv(label, e))?;

    for record in set.records() {
        writer
            .write_record(set.row_values(record).map(|v| v.unwrap_or("")))
            .map_err(|e| HasherError::csv(label, e))?;
    }

    writer.flush().map_err(|e| HasherError::io(label, e))?;
    Ok(())
}
