//! CLI argument definitions for mods2cb.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mods2cb",
    version,
    about = "Migrate a MODS spreadsheet export to a CollectionBuilder CSV",
    long_about = "Transform exported MODS metadata records into the CollectionBuilder\n\
                  CSV contract and publish them as a new dated output tab.\n\n\
                  The column mapping and display-template vocabulary ship with\n\
                  built-in defaults and can be overridden from JSON files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a MODS export and write the dated destination CSV.
    Migrate(MigrateArgs),

    /// Print the effective column mapping.
    Mapping(MappingArgs),

    /// List the destination schema and its required columns.
    Columns,
}

#[derive(Parser)]
pub struct MigrateArgs {
    /// Path to the exported MODS CSV (first row = column headings).
    #[arg(value_name = "SOURCE_CSV")]
    pub source: PathBuf,

    /// Output directory for the dated tab (default: <SOURCE_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Column mapping JSON file (default: the built-in MODS mapping).
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Display-template vocabulary JSON file (default: built-in table).
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Name prefix for the dated output tab.
    #[arg(long = "tab-prefix", value_name = "NAME", default_value = "ready-for-CB")]
    pub tab_prefix: String,

    /// Validate and transform, report, but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct MappingArgs {
    /// Column mapping JSON file (default: the built-in MODS mapping).
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
