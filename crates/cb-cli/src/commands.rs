use anyhow::Result;
use comfy_table::{Cell, Table};

use cb_model::{DESTINATION_COLUMNS, REQUIRED_COLUMNS, ColumnAction};

use cb_cli::pipeline::{MigrateConfig, default_output_dir, load_mapping, run_migration};
use cb_cli::types::MigrateOutcome;

use crate::cli::{MappingArgs, MigrateArgs};
use crate::summary::apply_table_style;

pub fn run_migrate(args: &MigrateArgs) -> Result<MigrateOutcome> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.source));
    let config = MigrateConfig {
        source: &args.source,
        output_dir: &output_dir,
        mapping: args.mapping.as_deref(),
        vocabulary: args.vocabulary.as_deref(),
        tab_prefix: &args.tab_prefix,
        dry_run: args.dry_run,
    };
    run_migration(&config)
}

pub fn run_mapping(args: &MappingArgs) -> Result<()> {
    let mapping = load_mapping(args.mapping.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Source column", "Action", "Transform", "Target"]);
    apply_table_style(&mut table);
    for (column, action) in mapping.iter() {
        let (kind, transform, target) = match action {
            ColumnAction::Rename { target } => ("rename", "-", target.as_str()),
            ColumnAction::Drop => ("drop", "-", "-"),
            ColumnAction::Invoke { transform, target } => (
                "invoke",
                transform.as_str(),
                target.as_deref().unwrap_or("-"),
            ),
        };
        table.add_row(vec![column, kind, transform, target]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Destination column", "Required"]);
    apply_table_style(&mut table);
    for column in DESTINATION_COLUMNS {
        let required = if REQUIRED_COLUMNS.contains(&column) {
            "yes"
        } else {
            ""
        };
        table.add_row(vec![Cell::new(column), Cell::new(required)]);
    }
    println!("{table}");
    Ok(())
}
