//! Run-artifact persistence.
//!
//! A completed run writes two bincode files keyed by the reference date:
//! `model-<date>.bin` for the regression and `dv-<date>.b` for the
//! vectorizer. No versioning; an existing artifact at the same path is
//! overwritten. Two runs for the same date racing on the same paths are
//! last-writer-wins by contract.

use crate::error::{ModelError, Result};
use crate::regression::LinearRegression;
use crate::vectorizer::DictVectorizer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the two artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Serialized regression model
    pub model: PathBuf,
    /// Serialized vectorizer
    pub vectorizer: PathBuf,
}

/// Artifact paths for a reference date, without touching the filesystem.
pub fn artifact_paths(dir: &Path, reference_date: &str) -> ArtifactPaths {
    ArtifactPaths {
        model: dir.join(format!("model-{reference_date}.bin")),
        vectorizer: dir.join(format!("dv-{reference_date}.b")),
    }
}

/// Persist the fitted model and vectorizer for a reference date.
pub fn save_artifacts(
    dir: &Path,
    reference_date: &str,
    model: &LinearRegression,
    dv: &DictVectorizer,
) -> Result<ArtifactPaths> {
    let paths = artifact_paths(dir, reference_date);

    write_bincode(&paths.model, model)?;
    write_bincode(&paths.vectorizer, dv)?;

    info!(
        model = %paths.model.display(),
        vectorizer = %paths.vectorizer.display(),
        "run artifacts written"
    );
    Ok(paths)
}

/// Load previously persisted artifacts for a reference date.
pub fn load_artifacts(
    dir: &Path,
    reference_date: &str,
) -> Result<(LinearRegression, DictVectorizer)> {
    let paths = artifact_paths(dir, reference_date);
    let model = read_bincode(&paths.model)?;
    let dv = read_bincode(&paths.vectorizer)?;
    Ok((model, dv))
}

fn write_bincode<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|source| ModelError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    bincode::serialize_into(BufWriter::new(file), value)?;
    Ok(())
}

fn read_bincode<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| ModelError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::train_model;
    use polars::prelude::*;
    use tripflow_features::DURATION_COLUMN;

    fn fitted() -> (LinearRegression, DictVectorizer) {
        let df = DataFrame::new(vec![
            Column::new("PUlocationID".into(), &["1", "2", "1"]),
            Column::new("DOlocationID".into(), &["9", "8", "9"]),
            Column::new(DURATION_COLUMN.into(), &[10.0, 20.0, 12.0]),
        ])
        .unwrap();
        train_model(&df, &["PUlocationID", "DOlocationID"]).unwrap()
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let (model, dv) = fitted();

        let paths = save_artifacts(dir.path(), "2021-08-15", &model, &dv).unwrap();
        assert_eq!(paths.model, dir.path().join("model-2021-08-15.bin"));
        assert_eq!(paths.vectorizer, dir.path().join("dv-2021-08-15.b"));
        assert!(paths.model.metadata().unwrap().len() > 0);
        assert!(paths.vectorizer.metadata().unwrap().len() > 0);

        let (loaded_model, loaded_dv) = load_artifacts(dir.path(), "2021-08-15").unwrap();
        assert_eq!(loaded_model, model);
        assert_eq!(loaded_dv, dv);
    }

    #[test]
    fn test_overwrite_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        let (model, dv) = fitted();

        save_artifacts(dir.path(), "2021-08-15", &model, &dv).unwrap();
        // Second run for the same date replaces the files.
        save_artifacts(dir.path(), "2021-08-15", &model, &dv).unwrap();

        let (loaded_model, _) = load_artifacts(dir.path(), "2021-08-15").unwrap();
        assert_eq!(loaded_model, model);
    }

    #[test]
    fn test_load_missing_artifact_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_artifacts(dir.path(), "1999-01-01").unwrap_err();
        assert!(matches!(err, ModelError::ArtifactIo { .. }));
    }
}
