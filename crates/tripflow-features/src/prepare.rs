//! Trip-table feature preparation.
//!
//! Three steps, applied identically to the training and validation tables:
//! derive the `duration` target in fractional minutes, keep trips in the
//! [1, 60]-minute band, and coerce the categorical columns to strings with
//! missing values mapped to the `"-1"` sentinel. The train/validation
//! distinction only tags the emitted log line.

use crate::error::{FeatureError, Result};
use polars::prelude::*;
use tracing::info;

/// Pickup timestamp column.
pub const PICKUP_COLUMN: &str = "pickup_datetime";

/// Drop-off timestamp column.
pub const DROPOFF_COLUMN: &str = "dropOff_datetime";

/// Derived target column, in fractional minutes.
pub const DURATION_COLUMN: &str = "duration";

/// Shortest trip retained, inclusive.
pub const MIN_DURATION_MINUTES: f64 = 1.0;

/// Longest trip retained, inclusive.
pub const MAX_DURATION_MINUTES: f64 = 60.0;

/// Which table a preparation pass is operating on.
///
/// Affects only the log line; there is no behavioral branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Training table
    Train,
    /// Validation table
    Validation,
}

impl Phase {
    /// Human-readable phase tag used in log output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Train => "training",
            Self::Validation => "validation",
        }
    }
}

/// Prepare a raw trip table for training or evaluation.
///
/// The [1, 60]-minute duration filter is the sole outlier policy and is
/// not configurable. Idempotent: rerunning on an already-prepared table
/// changes nothing.
pub fn prepare_features(df: DataFrame, categorical: &[&str], phase: Phase) -> Result<DataFrame> {
    require_columns(&df, categorical)?;

    let mut lf = df
        .lazy()
        .with_column(
            ((col(DROPOFF_COLUMN) - col(PICKUP_COLUMN))
                .dt()
                .total_milliseconds()
                .cast(DataType::Float64)
                / lit(60_000.0))
            .alias(DURATION_COLUMN),
        )
        .filter(
            col(DURATION_COLUMN)
                .gt_eq(lit(MIN_DURATION_MINUTES))
                .and(col(DURATION_COLUMN).lt_eq(lit(MAX_DURATION_MINUTES))),
        );

    // The vectorizer treats values as categorical tokens, so codes must be
    // strings; missing location ids become the "-1" sentinel.
    for &column in categorical {
        lf = lf.with_column(
            col(column)
                .fill_null(lit(-1))
                .cast(DataType::Int64)
                .cast(DataType::String)
                .alias(column),
        );
    }

    let prepared = lf.collect()?;

    let mean_duration = prepared.column(DURATION_COLUMN)?.f64()?.mean();
    info!(
        phase = phase.as_str(),
        rows = prepared.height(),
        mean_duration = mean_duration.unwrap_or(f64::NAN),
        "mean retained trip duration"
    );

    Ok(prepared)
}

fn require_columns(df: &DataFrame, categorical: &[&str]) -> Result<()> {
    let expected = [PICKUP_COLUMN, DROPOFF_COLUMN]
        .into_iter()
        .chain(categorical.iter().copied());
    for column in expected {
        if !df.get_column_names().iter().any(|name| name.as_str() == column) {
            return Err(FeatureError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
