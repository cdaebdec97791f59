//! End-of-run report: what was processed, suppressed, and flagged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::DestinationRecord;
use crate::schema::REQUIRED_COLUMNS;

/// A controlled-vocabulary code with no entry in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyMiss {
    /// 1-based data row in the source table.
    pub row: usize,
    pub column: String,
    pub code: String,
}

/// A thumbnail value that did not match the stashed thumbnail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailMismatch {
    pub row: usize,
    pub column: String,
    pub value: String,
    pub expected: Option<String>,
}

/// A record missing one or more required destination fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredFieldViolation {
    pub row: usize,
    /// The record's canonical id, when one was captured.
    pub objectid: String,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub records_processed: usize,
    /// Source column -> count of values a transform declined to emit.
    pub suppressed_by_source: BTreeMap<String, usize>,
    /// Destination column -> count of blank cells across all records.
    pub blank_by_destination: BTreeMap<String, usize>,
    pub vocabulary_misses: Vec<VocabularyMiss>,
    pub thumbnail_mismatches: Vec<ThumbnailMismatch>,
    pub required_field_violations: Vec<RequiredFieldViolation>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_suppressed(&mut self, source_column: &str) {
        *self
            .suppressed_by_source
            .entry(source_column.to_string())
            .or_insert(0) += 1;
    }

    /// Tally blank destination cells for one finished record.
    pub fn record_blanks(&mut self, record: &DestinationRecord) {
        for column in record.blank_columns() {
            *self
                .blank_by_destination
                .entry(column.to_string())
                .or_insert(0) += 1;
        }
    }

    /// Flag a record whose required fields are incomplete. Returns the
    /// missing columns so callers can log them.
    pub fn check_required_fields(
        &mut self,
        row: usize,
        objectid: &str,
        record: &DestinationRecord,
    ) -> Vec<String> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| record.is_blank(column))
            .map(|column| (*column).to_string())
            .collect();
        if !missing.is_empty() {
            self.required_field_violations.push(RequiredFieldViolation {
                row,
                objectid: objectid.to_string(),
                missing: missing.clone(),
            });
        }
        missing
    }

    /// Vocabulary misses are data errors; everything else is a flag.
    pub fn has_errors(&self) -> bool {
        !self.vocabulary_misses.is_empty()
    }

    pub fn suppressed_total(&self) -> usize {
        self.suppressed_by_source.values().sum()
    }
}
