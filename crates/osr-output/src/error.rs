use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("no tables to compile")]
    EmptyInput,

    /// `table` is the 1-based position of the offending input.
    #[error("column mismatch between tables 1 and {table}: expected {expected} columns, found {found}")]
    ColumnCountMismatch {
        table: usize,
        expected: usize,
        found: usize,
    },

    /// `position` is the 1-based column position.
    #[error(
        "column mismatch between tables 1 and {table}: column {position} is '{found}', expected '{expected}'"
    )]
    ColumnMismatch {
        table: usize,
        position: usize,
        expected: String,
        found: String,
    },

    #[error("table has no '{column}' column")]
    MissingColumn { column: String },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build CSV output: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, OutputError>;
