//! Records, recognized fields and record sets.

use std::fmt;

/// Column names the pipeline treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OrgName,
    OrgAddress,
    PhoneNumber,
    CompanyEmail,
    CompanyWebsite,
    /// Derived from the canonical `Org Name`
    OrgNameFirst5,
    /// Derived from the canonical `Org Name`
    OrgNameLast5,
}

impl Field {
    /// Fields replaced by their digest, in output order.
    pub const DIGESTED: [Field; 7] = [
        Field::OrgName,
        Field::OrgAddress,
        Field::PhoneNumber,
        Field::CompanyEmail,
        Field::CompanyWebsite,
        Field::OrgNameFirst5,
        Field::OrgNameLast5,
    ];

    /// Exact, case-sensitive header text.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::OrgName => "Org Name",
            Self::OrgAddress => "Org Address",
            Self::PhoneNumber => "Phone Number",
            Self::CompanyEmail => "Company Email",
            Self::CompanyWebsite => "Company Website",
            Self::OrgNameFirst5 => "Org Name First 5 Letters",
            Self::OrgNameLast5 => "Org Name Last 5 Characters",
        }
    }

    pub fn from_column(name: &str) -> Option<Field> {
        Self::DIGESTED
            .into_iter()
            .find(|field| field.column_name() == name)
    }

    pub fn is_digested(self) -> bool {
        Self::DIGESTED.contains(&self)
    }

    pub fn is_derived(self) -> bool {
        matches!(self, Self::OrgNameFirst5 | Self::OrgNameLast5)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One row: an ordered mapping from column name to an optional value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs in order.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Value of `name`, or `None` when the field is absent or has no value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Replaces the value of `name` in place, appending the field if absent.
    pub fn set(&mut self, name: &str, value: Option<String>) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Consumes the record, yielding its values in column order.
    pub fn into_values(self) -> impl Iterator<Item = Option<String>> {
        self.fields.into_iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Option<String>> {
        self.fields.iter_mut().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A header row plus the records read under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Appends `name` to the header if absent. Returns true if it was added.
    pub fn add_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.columns.push(name.to_string());
        true
    }

    /// Adds a row aligned with the current columns.
    ///
    /// Missing trailing values are treated as absent; extra values are dropped.
    pub fn push_row(&mut self, mut values: Vec<Option<String>>) {
        values.resize(self.columns.len(), None);
        let record = Record::from_pairs(self.columns.iter().cloned().zip(values));
        self.records.push(record);
    }

    /// Adds `record` re-keyed to the current columns.
    ///
    /// Fields the set has no column for are dropped; missing ones are absent.
    pub fn push(&mut self, record: Record) {
        let values = self
            .columns
            .iter()
            .map(|c| record.get(c).map(str::to_string))
            .collect();
        self.push_row(values);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Values of `record` in header order; absent fields yield `None`.
    pub fn row_values<'a>(&'a self, record: &'a Record) -> impl Iterator<Item = Option<&'a str>> {
        self.columns.iter().map(move |c| record.get(c))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
