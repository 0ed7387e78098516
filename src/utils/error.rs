//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading snapshot or pool-worker files
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when flattening a sheet into rows
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SheetError {
    #[error("Sheet has no columns")]
    EmptySheet,

    #[error("Column {column} has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
