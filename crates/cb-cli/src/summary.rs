use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cb_model::DESTINATION_COLUMNS;
use cb_cli::types::MigrateOutcome;

pub fn print_summary(outcome: &MigrateOutcome) {
    let report = &outcome.report;
    println!("Tab: {}", outcome.tab_name);
    if let Some(path) = &outcome.destination {
        println!("Destination: {}", path.display());
    }
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    println!("Records processed: {}", report.records_processed);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Destination column"),
        header_cell("Blank cells"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for column in DESTINATION_COLUMNS {
        let blanks = report
            .blank_by_destination
            .get(column)
            .copied()
            .unwrap_or(0);
        table.add_row(vec![Cell::new(column), count_cell(blanks, Color::Yellow)]);
    }
    println!("{table}");

    if !report.suppressed_by_source.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Source column"),
            header_cell("Suppressed"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (column, count) in &report.suppressed_by_source {
            table.add_row(vec![Cell::new(column), count_cell(*count, Color::Yellow)]);
        }
        println!();
        println!("Suppressed values:");
        println!("{table}");
    }

    if !report.vocabulary_misses.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Row"),
            header_cell("Column"),
            header_cell("Code"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for miss in &report.vocabulary_misses {
            table.add_row(vec![
                Cell::new(miss.row),
                Cell::new(&miss.column),
                Cell::new(&miss.code).fg(Color::Red),
            ]);
        }
        println!();
        println!("Vocabulary misses:");
        println!("{table}");
    }

    if !report.required_field_violations.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Row"),
            header_cell("objectid"),
            header_cell("Missing required fields"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for violation in &report.required_field_violations {
            table.add_row(vec![
                Cell::new(violation.row),
                Cell::new(&violation.objectid),
                Cell::new(violation.missing.join(", ")).fg(Color::Yellow),
            ]);
        }
        println!();
        println!("Required-field violations:");
        println!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
