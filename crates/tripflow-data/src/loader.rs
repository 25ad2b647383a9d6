//! Parquet loading for monthly trip-record tables.

use crate::error::{DataError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read a monthly trip-record parquet file into a DataFrame.
///
/// Pure function of its input path: no caching, no schema coercion. A
/// missing or unreadable file fails the run with [`DataError::Io`]; a
/// corrupt parquet payload surfaces as [`DataError::Polars`].
pub fn read_trips(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let df = ParquetReader::new(file).finish()?;
    Ok(df)
}

/// Check that every expected column is present in a loaded table.
///
/// Schema violations are fatal for the run, so this is checked once per
/// loaded table rather than deferred to the first downstream projection.
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    for &column in columns {
        if !df.get_column_names().iter().any(|name| name.as_str() == column) {
            return Err(DataError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("PUlocationID".into(), &[1i64, 2, 3]),
            Column::new("DOlocationID".into(), &[4i64, 5, 6]),
        ])
        .unwrap()
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_trips(Path::new("./data/fhv_tripdata_1999-01.parquet")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.parquet");

        let mut df = sample_frame();
        ParquetWriter::new(File::create(&path).unwrap())
            .finish(&mut df)
            .unwrap();

        let loaded = read_trips(&path).unwrap();
        assert_eq!(loaded.height(), 3);
        assert!(loaded.equals(&df));
    }

    #[test]
    fn test_require_columns() {
        let df = sample_frame();
        assert!(require_columns(&df, &["PUlocationID", "DOlocationID"]).is_ok());

        let err = require_columns(&df, &["pickup_datetime"]).unwrap_err();
        match err {
            DataError::MissingColumn { column } => assert_eq!(column, "pickup_datetime"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
