//! Ingestion errors

use std::io;

use thiserror::Error;

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while reading source data files
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{source_name} is missing required column '{column}'")]
    MissingColumn {
        source_name: &'static str,
        column: &'static str,
    },

    #[error("row {row}: malformed {field} '{value}'")]
    MalformedField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        IngestError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(row: usize, field: &'static str, value: impl Into<String>) -> Self {
        IngestError::MalformedField {
            row,
            field,
            value: value.into(),
        }
    }
}
