//! Output errors

use std::io;

use thiserror::Error;

/// Result type for result writers
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors raised while writing query results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported output format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}
