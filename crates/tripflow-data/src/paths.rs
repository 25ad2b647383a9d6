//! Dataset path resolution.
//!
//! A run is keyed by a reference date: the model trains on the month two
//! months before it and validates on the month immediately before it.
//! Month arithmetic rolls over year boundaries (reference 2022-01 trains
//! on 2021-11 and validates on 2021-12).

use crate::error::{DataError, Result};
use chrono::{Datelike, Months, NaiveDate};
use std::path::{Path, PathBuf};

/// Default directory holding the monthly trip-record files.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default dataset name prefix of the monthly files.
pub const DEFAULT_DATASET_NAME: &str = "fhv_tripdata";

/// Resolved dataset paths for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Training dataset (reference month minus two)
    pub train: PathBuf,
    /// Validation dataset (reference month minus one)
    pub validation: PathBuf,
}

/// Parse a `YYYY-MM-DD` reference date string.
pub fn parse_reference_date(reference_date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(reference_date, "%Y-%m-%d")
        .map_err(|e| DataError::InvalidDate(format!("{reference_date:?}: {e}")))
}

/// Resolve the training and validation dataset paths for a reference date.
///
/// Fails with [`DataError::InvalidDate`] before touching the filesystem if
/// the date string is malformed. Pure: no side effects, no caching.
pub fn resolve_paths(
    reference_date: &str,
    data_dir: &Path,
    dataset_name: &str,
) -> Result<DatasetPaths> {
    let date = parse_reference_date(reference_date)?;

    let train_month = shift_months_back(date, 2)?;
    let val_month = shift_months_back(date, 1)?;

    Ok(DatasetPaths {
        train: monthly_path(data_dir, dataset_name, train_month),
        validation: monthly_path(data_dir, dataset_name, val_month),
    })
}

/// Subtract whole calendar months, clamping the day within the target month.
fn shift_months_back(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_sub_months(Months::new(months))
        .ok_or_else(|| DataError::InvalidDate(format!("{date} underflows by {months} month(s)")))
}

fn monthly_path(data_dir: &Path, dataset_name: &str, month: NaiveDate) -> PathBuf {
    data_dir.join(format!(
        "{dataset_name}_{}-{:02}.parquet",
        month.year(),
        month.month()
    ))
}
