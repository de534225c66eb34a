//! Parses the delimited text that SQL*Plus prints with `SET MARKUP CSV ON`
//! back into ordered row records.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("malformed delimited output: {0}")]
    Csv(#[from] csv::Error),
}

/// One result row: an ordered mapping from header name to raw text value.
/// Field order follows the header line; values are never coerced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowRecord {
    fields: Vec<(String, String)>,
}

impl RowRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for RowRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parses CSV text (header line first) into row records.
///
/// Empty input yields no rows; a malformed record fails the whole call, so
/// callers never observe partial results.
pub fn parse_rows(text: &str) -> Result<Vec<RowRecord>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        log::warn!("no result text to parse; returning no rows");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(false)
        .from_reader(trimmed.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(RowRecord { fields });
    }
    log::debug!("parsed {} rows from result text", rows.len());
    Ok(rows)
}
