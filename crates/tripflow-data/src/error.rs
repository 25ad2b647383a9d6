//! Error types for dataset operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while resolving or loading datasets.
#[derive(Debug, Error)]
pub enum DataError {
    /// Malformed or out-of-range reference date
    #[error("Invalid reference date: {0}")]
    InvalidDate(String),

    /// Dataset file could not be opened
    #[error("Cannot open dataset {path}: {source}")]
    Io {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Polars error (parquet decode, malformed frame)
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Expected column absent from a loaded table
    #[error("Expected column {column:?} missing from loaded table")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },
}
