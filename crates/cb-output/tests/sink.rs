//! Integration tests for destination writing.

use std::fs;

use cb_model::{DESTINATION_COLUMNS, DestinationRecord, RunReport};
use cb_output::{write_destination_csv, write_report_json};
use tempfile::tempdir;

fn record(objectid: &str, title: &str) -> DestinationRecord {
    let mut record = DestinationRecord::new();
    record.set("objectid", objectid).unwrap();
    record.set("title", title).unwrap();
    record
}

#[test]
fn writes_header_then_rows_in_order() {
    let dir = tempdir().unwrap();
    let records = vec![record("grinnell_2", "Second"), record("grinnell_1", "First")];

    let path = write_destination_csv(dir.path(), "ready-for-CB-20260829-141503", &records).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "ready-for-CB-20260829-141503.csv"
    );
    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), DESTINATION_COLUMNS.join(","));
    let first = lines.next().unwrap();
    assert!(first.starts_with("grinnell_2,"));
    assert!(first.contains("Second"));
    let second = lines.next().unwrap();
    assert!(second.starts_with("grinnell_1,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn untouched_columns_emit_as_empty_cells() {
    let dir = tempdir().unwrap();
    let records = vec![record("grinnell_1", "First")];

    let path = write_destination_csv(dir.path(), "tab", &records).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let row = contents.lines().nth(1).unwrap();
    let cells: Vec<&str> = row.split(',').collect();
    assert_eq!(cells.len(), DESTINATION_COLUMNS.len());
    // parentid sits between objectid and display_template, untouched.
    assert_eq!(cells[1], "");
}

#[test]
fn report_json_round_trips() {
    let dir = tempdir().unwrap();
    let mut report = RunReport::new();
    report.records_processed = 5;
    report.record_suppressed("SEQUENCE");

    let path = write_report_json(dir.path(), "tab", &report).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let back: RunReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(back.records_processed, 5);
    assert_eq!(back.suppressed_by_source.get("SEQUENCE"), Some(&1));
}
