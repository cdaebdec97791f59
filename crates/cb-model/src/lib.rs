pub mod error;
pub mod mapping;
pub mod record;
pub mod report;
pub mod schema;
pub mod vocabulary;

pub use error::{MigrateError, Result};
pub use mapping::{ColumnAction, ColumnMapping, TransformId};
pub use record::{DestinationRecord, SourceRecord, SourceTable};
pub use report::{RequiredFieldViolation, RunReport, ThumbnailMismatch, VocabularyMiss};
pub use schema::{DESTINATION_COLUMNS, REQUIRED_COLUMNS, is_destination_column};
pub use vocabulary::Vocabulary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let mut report = RunReport::new();
        report.records_processed = 2;
        report.record_suppressed("SEQUENCE");
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: RunReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.records_processed, 2);
        assert_eq!(round.suppressed_by_source.get("SEQUENCE"), Some(&1));
    }

    #[test]
    fn default_mapping_targets_live_in_schema() {
        let mapping = ColumnMapping::default_mods();
        for (column, action) in mapping.iter() {
            if let Some(target) = action.target() {
                assert!(
                    is_destination_column(target),
                    "{column} maps to unknown destination {target}"
                );
            }
        }
    }
}
