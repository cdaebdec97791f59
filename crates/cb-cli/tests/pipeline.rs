//! End-to-end tests for the migration pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use cb_cli::pipeline::{MigrateConfig, default_output_dir, run_migration};
use tempfile::tempdir;

const BASE: &str = "https://digital.grinnell.edu/islandora/object/grinnell:1";

fn write_source(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("mods.csv");
    fs::write(&path, contents).expect("write source csv");
    path
}

fn full_source_row() -> String {
    format!(
        "PID,CMODEL,OBJ,THUMBNAIL,Title,MIME_Type\n\
         grinnell:1,islandora:sp_pdf,{BASE},{BASE}/TN/view,A title,application/pdf\n"
    )
}

#[test]
fn migrates_a_complete_record() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), &full_source_row());
    let output_dir = dir.path().join("out");
    let outcome = run_migration(&MigrateConfig {
        source: &source,
        output_dir: &output_dir,
        mapping: None,
        vocabulary: None,
        tab_prefix: "ready-for-CB",
        dry_run: false,
    })
    .unwrap();

    assert_eq!(outcome.report.records_processed, 1);
    assert!(!outcome.report.has_errors());
    assert!(outcome.report.required_field_violations.is_empty());

    let destination = outcome.destination.expect("destination written");
    let contents = fs::read_to_string(&destination).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("objectid,parentid,display_template,"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("grinnell_1,"));
    assert!(row.contains("pdf"));
    assert!(row.contains(&format!("{BASE}/OBJ/view")));
    // Thumbnail URL lands in both image columns.
    assert_eq!(row.matches(&format!("{BASE}/TN/view")).count(), 2);

    let report_path = outcome.report_path.expect("report written");
    assert!(report_path.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), &full_source_row());
    let output_dir = dir.path().join("out");
    let outcome = run_migration(&MigrateConfig {
        source: &source,
        output_dir: &output_dir,
        mapping: None,
        vocabulary: None,
        tab_prefix: "ready-for-CB",
        dry_run: true,
    })
    .unwrap();

    assert!(outcome.destination.is_none());
    assert!(outcome.report_path.is_none());
    assert!(!output_dir.exists());
    assert_eq!(outcome.report.records_processed, 1);
}

#[test]
fn vocabulary_miss_surfaces_in_the_outcome() {
    let dir = tempdir().unwrap();
    let source = write_source(
        dir.path(),
        "PID,CMODEL,Title\ngrinnell:1,islandora:newspaperCModel,A title\n",
    );
    let output_dir = dir.path().join("out");
    let outcome = run_migration(&MigrateConfig {
        source: &source,
        output_dir: &output_dir,
        mapping: None,
        vocabulary: None,
        tab_prefix: "ready-for-CB",
        dry_run: false,
    })
    .unwrap();

    assert!(outcome.report.has_errors());
    assert_eq!(outcome.report.vocabulary_misses.len(), 1);
    // The record is still in the output, flagged rather than dropped.
    let destination = outcome.destination.unwrap();
    let contents = fs::read_to_string(&destination).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn unmapped_source_column_aborts_without_output() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), "PID,Surprise\ngrinnell:1,x\n");
    let output_dir = dir.path().join("out");
    let error = run_migration(&MigrateConfig {
        source: &source,
        output_dir: &output_dir,
        mapping: None,
        vocabulary: None,
        tab_prefix: "ready-for-CB",
        dry_run: false,
    })
    .unwrap_err();

    assert!(format!("{error:#}").contains("Surprise"));
    assert!(!output_dir.exists());
}

#[test]
fn reruns_produce_identical_destination_rows() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), &full_source_row());
    let output_dir = dir.path().join("out");
    let config = MigrateConfig {
        source: &source,
        output_dir: &output_dir,
        mapping: None,
        vocabulary: None,
        tab_prefix: "ready-for-CB",
        dry_run: false,
    };

    let first = run_migration(&config).unwrap();
    let first_contents = fs::read_to_string(first.destination.unwrap()).unwrap();
    let second = run_migration(&config).unwrap();
    let second_contents = fs::read_to_string(second.destination.unwrap()).unwrap();

    // Byte-identical modulo the timestamp, which lives only in the name.
    assert_eq!(first_contents, second_contents);
}

#[test]
fn default_output_dir_sits_next_to_the_source() {
    let dir = default_output_dir(Path::new("/data/mods.csv"));
    assert_eq!(dir, Path::new("/data/output"));
}
