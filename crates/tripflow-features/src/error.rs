//! Error types for feature preparation.

use thiserror::Error;

/// Result type for feature preparation.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors that can occur during feature preparation.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Expected column absent from the input table
    #[error("Expected column {column:?} missing from trip table")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },
}
