use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use cb_model::{SourceRecord, SourceTable};

/// A raw CSV table: the first row is the header, everything below is data.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Convert into the model's record form, pairing each cell with its
    /// header in source column order.
    pub fn into_table(self) -> SourceTable {
        let records = self
            .rows
            .into_iter()
            .map(|row| {
                SourceRecord::from_pairs(
                    self.headers
                        .iter()
                        .cloned()
                        .zip(row)
                        .collect(),
                )
            })
            .collect();
        SourceTable::new(self.headers, records)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a source CSV into memory.
///
/// All cells are text. Fully blank rows are skipped; short rows are padded
/// to the header width. A file without a header row is an error.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        bail!("{}: no header row found", path.display());
    }
    let mut raw_rows = raw_rows.into_iter();
    let headers: Vec<String> = raw_rows
        .next()
        .unwrap_or_default()
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(
        source_file = %path.display(),
        column_count = headers.len(),
        row_count = rows.len(),
        "source table loaded"
    );
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_collapses_whitespace() {
        assert_eq!(normalize_header("  PID "), "PID");
        assert_eq!(normalize_header("\u{feff}Title"), "Title");
        assert_eq!(normalize_header("Index   Date"), "Index Date");
    }

    #[test]
    fn into_table_pairs_headers_with_cells() {
        let table = CsvTable {
            headers: vec!["PID".to_string(), "Title".to_string()],
            rows: vec![vec!["grinnell:1".to_string(), "A title".to_string()]],
        };
        let source = table.into_table();
        assert_eq!(source.records.len(), 1);
        assert_eq!(source.records[0].get("PID"), Some("grinnell:1"));
        assert_eq!(source.records[0].get("Title"), Some("A title"));
    }
}
