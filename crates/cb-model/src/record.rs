//! Source and destination record representations.

use std::collections::BTreeMap;

use crate::error::{MigrateError, Result};
use crate::schema::{DESTINATION_COLUMNS, is_destination_column};

/// One input row: an ordered mapping from source column name to raw text.
///
/// Immutable once read; column order follows the source header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    fields: Vec<(String, String)>,
}

impl SourceRecord {
    pub fn from_pairs(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Iterate fields in source column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The full source table: ordered headers plus one record per data row.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<SourceRecord>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, records: Vec<SourceRecord>) -> Self {
        Self { headers, records }
    }
}

/// One output row, pre-populated with every destination column blank so
/// columns no transform touches still emit as empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRecord {
    values: BTreeMap<String, String>,
}

impl DestinationRecord {
    pub fn new() -> Self {
        let values = DESTINATION_COLUMNS
            .iter()
            .map(|column| ((*column).to_string(), String::new()))
            .collect();
        Self { values }
    }

    /// Set a destination cell. The column must belong to the schema.
    pub fn set(&mut self, column: &str, value: impl Into<String>) -> Result<()> {
        if !is_destination_column(column) {
            return Err(MigrateError::NotADestinationColumn {
                column: column.to_string(),
            });
        }
        self.values.insert(column.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self, column: &str) -> bool {
        self.get(column).trim().is_empty()
    }

    /// Cell values in destination schema order, ready for CSV emission.
    pub fn to_row(&self) -> Vec<String> {
        DESTINATION_COLUMNS
            .iter()
            .map(|column| self.get(column).to_string())
            .collect()
    }

    /// Destination columns whose cells are still blank.
    pub fn blank_columns(&self) -> Vec<&'static str> {
        DESTINATION_COLUMNS
            .iter()
            .copied()
            .filter(|column| self.is_blank(column))
            .collect()
    }
}

impl Default for DestinationRecord {
    fn default() -> Self {
        Self::new()
    }
}
