//! Run configuration.
//!
//! All knobs of a run live here and are passed explicitly into the
//! pipeline; nothing is read from process-wide state at load time. The
//! schedule section is configuration for the hosting scheduler, which
//! owns recurrence, retry and isolation between runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tripflow_data::paths::DEFAULT_DATASET_NAME;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read config {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`RunConfig`]
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Recurrence contract handed to the external scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Cron expression for recurring runs
    pub cron: String,
    /// Timezone the cron expression is evaluated in
    pub timezone: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            // 09:00 on the 15th of every month
            cron: "0 9 15 * *".to_string(),
            timezone: "Europe/Berlin".to_string(),
        }
    }
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory holding the monthly trip-record parquet files
    pub data_dir: PathBuf,
    /// Dataset name prefix of the monthly files
    pub dataset_name: String,
    /// Directory run artifacts are written to
    pub artifact_dir: PathBuf,
    /// Recurrence contract for the external scheduler
    pub schedule: ScheduleConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            dataset_name: DEFAULT_DATASET_NAME.to_string(),
            artifact_dir: PathBuf::from("."),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Absent keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
