//! The migration pipeline: Loader -> Transform Engine -> Sink Writer.
//!
//! Strictly sequential, one pass over records, no partial commits: the
//! destination tab is written once, after every record has been transformed.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use cb_ingest::read_csv_table;
use cb_model::{ColumnMapping, SourceTable, Vocabulary};
use cb_output::{dated_tab_name, write_destination_csv, write_report_json};
use cb_transform::TransformEngine;

use crate::types::MigrateOutcome;

/// Configuration for one migration run.
#[derive(Debug)]
pub struct MigrateConfig<'a> {
    pub source: &'a Path,
    pub output_dir: &'a Path,
    /// Mapping JSON override; `None` uses the built-in MODS mapping.
    pub mapping: Option<&'a Path>,
    /// Vocabulary JSON override; `None` uses the built-in table.
    pub vocabulary: Option<&'a Path>,
    pub tab_prefix: &'a str,
    pub dry_run: bool,
}

/// Load the column mapping, preferring an operator-supplied file.
pub fn load_mapping(path: Option<&Path>) -> Result<ColumnMapping> {
    match path {
        Some(path) => ColumnMapping::load(path)
            .with_context(|| format!("load mapping: {}", path.display())),
        None => Ok(ColumnMapping::default_mods()),
    }
}

/// Load the display-template vocabulary, preferring an operator file.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => Vocabulary::load(path)
            .with_context(|| format!("load vocabulary: {}", path.display())),
        None => Ok(Vocabulary::default_display_templates()),
    }
}

/// Stage 1: read the full source table into memory.
pub fn load_source(path: &Path) -> Result<SourceTable> {
    let span = info_span!("ingest", source_file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_csv_table(path)?.into_table();
    info!(
        source_file = %path.display(),
        column_count = table.headers.len(),
        record_count = table.records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

/// Run the whole pipeline for one source table.
pub fn run_migration(config: &MigrateConfig<'_>) -> Result<MigrateOutcome> {
    let span = info_span!("migrate", source_file = %config.source.display());
    let _guard = span.enter();

    let mapping = load_mapping(config.mapping)?;
    let vocabulary = load_vocabulary(config.vocabulary)?;
    let table = load_source(config.source)?;

    let engine = TransformEngine::new(mapping, vocabulary);
    let run = engine
        .run(&table)
        .with_context(|| format!("transform {}", config.source.display()))?;

    let tab_name = dated_tab_name(config.tab_prefix, Local::now());
    let (destination, report_path) = if config.dry_run {
        info!(tab_name = %tab_name, "output skipped (dry run)");
        (None, None)
    } else {
        let destination = write_destination_csv(config.output_dir, &tab_name, &run.records)?;
        let report_path = write_report_json(config.output_dir, &tab_name, &run.report)?;
        (Some(destination), Some(report_path))
    };

    Ok(MigrateOutcome {
        tab_name,
        destination,
        report_path,
        report: run.report,
    })
}

/// Default output directory: an `output/` folder next to the source file.
pub fn default_output_dir(source: &Path) -> PathBuf {
    source
        .parent()
        .map(|parent| parent.join("output"))
        .unwrap_or_else(|| PathBuf::from("output"))
}
