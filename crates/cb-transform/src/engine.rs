//! The column transform engine.
//!
//! Evaluates the declarative column mapping once per source record, in
//! input order, producing one destination record per source record.

use std::time::Instant;

use tracing::{debug, info, info_span};

use cb_model::{
    ColumnAction, ColumnMapping, DestinationRecord, MigrateError, Result, RunReport, SourceRecord,
    SourceTable, Vocabulary, is_destination_column,
};

use crate::context::RecordContext;
use crate::functions::{self, FunctionCall, TransformValue};

/// Result of a full engine run: output rows plus the run report.
#[derive(Debug)]
pub struct TransformRun {
    pub records: Vec<DestinationRecord>,
    pub report: RunReport,
}

/// The engine holds the mapping and vocabulary for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct TransformEngine {
    mapping: ColumnMapping,
    vocabulary: Vocabulary,
}

impl TransformEngine {
    pub fn new(mapping: ColumnMapping, vocabulary: Vocabulary) -> Self {
        Self {
            mapping,
            vocabulary,
        }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Mapping Validator: runs once, before any record is processed.
    ///
    /// Every observed header must have a mapping entry, and every mapped
    /// target must belong to the destination schema. A gap here is schema
    /// drift the operator has to fix before any output can be trusted.
    pub fn validate(&self, headers: &[String]) -> Result<()> {
        if headers.is_empty() {
            return Err(MigrateError::EmptyTable);
        }
        let missing: Vec<String> = headers
            .iter()
            .filter(|header| self.mapping.get(header).is_none())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(MigrateError::UnmappedColumns { columns: missing });
        }
        for (column, action) in self.mapping.iter() {
            if let Some(target) = action.target()
                && !is_destination_column(target)
            {
                return Err(MigrateError::UnknownDestination {
                    column: column.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Transform one source record into one destination record.
    ///
    /// `row` is the 1-based data row, used for diagnostics. A fresh
    /// [`RecordContext`] scopes all carry-over state to this record.
    pub fn transform_record(
        &self,
        row: usize,
        record: &SourceRecord,
        report: &mut RunReport,
    ) -> Result<DestinationRecord> {
        let mut dest = DestinationRecord::new();
        let mut ctx = RecordContext::new();
        for (column, value) in record.iter() {
            let action = self
                .mapping
                .get(column)
                .ok_or_else(|| MigrateError::UnmappedColumn {
                    column: column.to_string(),
                })?;
            match action {
                ColumnAction::Rename { target } => {
                    // Verbatim copy, including empty strings.
                    dest.set(target, value)?;
                }
                ColumnAction::Drop => {}
                ColumnAction::Invoke { transform, target } => {
                    let call = FunctionCall {
                        value,
                        from_column: column,
                        target: target.as_deref(),
                        row,
                    };
                    let outcome = functions::apply(
                        *transform,
                        call,
                        &mut ctx,
                        &mut dest,
                        &self.vocabulary,
                        report,
                    )?;
                    match outcome {
                        TransformValue::Value(produced) => {
                            // The declared target is authoritative; with no
                            // target the value is discarded after side
                            // effects.
                            if let Some(target) = target {
                                dest.set(target, produced)?;
                            }
                        }
                        TransformValue::Suppressed => report.record_suppressed(column),
                    }
                }
            }
        }
        let objectid = ctx
            .object_id
            .unwrap_or_else(|| dest.get("objectid").to_string());
        let missing = report.check_required_fields(row, &objectid, &dest);
        if !missing.is_empty() {
            debug!(
                row,
                objectid = %objectid,
                missing = %missing.join(", "),
                "record is missing required fields"
            );
        }
        report.record_blanks(&dest);
        Ok(dest)
    }

    /// Run the full pipeline stage: validate, then one pass over records.
    ///
    /// Order-preserving and deterministic; the output always has exactly one
    /// record per input record.
    pub fn run(&self, table: &SourceTable) -> Result<TransformRun> {
        let span = info_span!("transform", record_count = table.records.len());
        let _guard = span.enter();
        let start = Instant::now();

        self.validate(&table.headers)?;

        let mut report = RunReport::new();
        let mut records = Vec::with_capacity(table.records.len());
        for (index, record) in table.records.iter().enumerate() {
            let dest = self.transform_record(index + 1, record, &mut report)?;
            records.push(dest);
        }
        report.records_processed = records.len();
        info!(
            record_count = records.len(),
            suppressed = report.suppressed_total(),
            vocabulary_misses = report.vocabulary_misses.len(),
            required_field_violations = report.required_field_violations.len(),
            duration_ms = start.elapsed().as_millis(),
            "transform complete"
        );
        Ok(TransformRun { records, report })
    }
}
