//! Destination sink: the dated output tab, realized as a dated CSV file.
//!
//! Output is written in one bulk operation: rows are buffered in memory and
//! the file only appears on disk once every row has been serialized, so a
//! failed run never leaves a partially committed destination.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use csv::WriterBuilder;
use tracing::info;

use cb_model::{DESTINATION_COLUMNS, DestinationRecord, RunReport};

/// Name for the dated destination tab, e.g. `ready-for-CB-20260829-141503`.
///
/// The timestamp exists only for traceability of the output artifact; it
/// never appears in cell data.
pub fn dated_tab_name(prefix: &str, at: DateTime<Local>) -> String {
    format!("{prefix}-{}", at.format("%Y%m%d-%H%M%S"))
}

/// Write the destination table as `<tab_name>.csv` under `output_dir`.
///
/// The header is the fixed destination schema; record order is preserved.
pub fn write_destination_csv(
    output_dir: &Path,
    tab_name: &str,
    records: &[DestinationRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(DESTINATION_COLUMNS)
        .context("write destination header")?;
    for record in records {
        writer
            .write_record(record.to_row())
            .context("write destination row")?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flush destination rows: {error}"))?;

    let path = output_dir.join(format!("{tab_name}.csv"));
    fs::write(&path, buffer).with_context(|| format!("write {}", path.display()))?;
    info!(
        output_file = %path.display(),
        record_count = records.len(),
        "destination table written"
    );
    Ok(path)
}

/// Write the machine-readable run report next to the destination table.
pub fn write_report_json(output_dir: &Path, tab_name: &str, report: &RunReport) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let path = output_dir.join(format!("{tab_name}-report.json"));
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
