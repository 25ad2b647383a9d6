//! Error types for model fitting, scoring and artifact persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur in the model layer.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Polars error while extracting records or targets
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// No rows survived feature preparation
    #[error("Empty training set: no rows survived feature preparation")]
    EmptyTrainingSet,

    /// Normal equations could not be solved
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Mismatched shapes between features, targets or coefficients
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Artifact file could not be created or opened
    #[error("Artifact IO error at {path}: {source}")]
    ArtifactIo {
        /// Artifact path that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Artifact serialization/deserialization error
    #[error("Artifact encoding error: {0}")]
    ArtifactCodec(#[from] bincode::Error),
}
