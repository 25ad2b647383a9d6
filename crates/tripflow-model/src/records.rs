//! Record and target extraction from prepared trip tables.

use crate::error::Result;
use polars::prelude::*;
use tripflow_features::DURATION_COLUMN;

/// Sentinel used by feature preparation for missing categorical values.
const MISSING_SENTINEL: &str = "-1";

/// Extract one record per row holding only the categorical values.
///
/// Prepared tables carry the categoricals as strings with missing values
/// already mapped to `"-1"`; any null that slips through is mapped to the
/// same sentinel here so records stay aligned with the vectorizer fields.
pub fn extract_records(df: &DataFrame, categorical: &[&str]) -> Result<Vec<Vec<String>>> {
    let mut columns = Vec::with_capacity(categorical.len());
    for &name in categorical {
        columns.push(df.column(name)?.str()?.clone());
    }

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let record = columns
            .iter()
            .map(|c| c.get(i).unwrap_or(MISSING_SENTINEL).to_string())
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Extract the `duration` target column as a dense vector.
pub fn duration_targets(df: &DataFrame) -> Result<Vec<f64>> {
    let durations = df.column(DURATION_COLUMN)?.f64()?;
    Ok(durations
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}
