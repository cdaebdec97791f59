use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    /// Structural mapping gap: the run must not start.
    #[error("source columns missing from the mapping: {}", .columns.join(", "))]
    UnmappedColumns { columns: Vec<String> },
    /// A single unmapped column hit mid-record (guards the engine invariant).
    #[error("source column '{column}' has no mapping entry")]
    UnmappedColumn { column: String },
    #[error("mapping for '{column}' targets unknown destination column '{target}'")]
    UnknownDestination { column: String, target: String },
    #[error("'{column}' is not a destination schema column")]
    NotADestinationColumn { column: String },
    #[error("source table has no header row")]
    EmptyTable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MigrateError>;
