//! Pipeline driver.
//!
//! One linear sequence per run, each stage's output feeding the next:
//! resolve paths → load train → prepare train → load validation →
//! prepare validation → train → evaluate → persist artifacts. Any stage
//! error aborts the run before artifacts are written; there is no
//! retry, resume, or intermediate persisted state.

use crate::config::RunConfig;
use chrono::Local;
use thiserror::Error;
use tracing::info;
use tripflow_data::{DataError, read_trips, require_columns, resolve_paths};
use tripflow_features::{
    CATEGORICAL_COLUMNS, DROPOFF_COLUMN, FeatureError, PICKUP_COLUMN, Phase, prepare_features,
};
use tripflow_model::{
    ArtifactPaths, ModelError, evaluate_model, save_artifacts, score_table, train_model,
};

/// Errors that can abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Path resolution or data loading failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Feature preparation failed
    #[error("Feature error: {0}")]
    Features(#[from] FeatureError),

    /// Model fit, scoring or artifact persistence failed
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Reference date the run was keyed by
    pub reference_date: String,
    /// In-sample RMSE on the training month
    pub train_rmse: f64,
    /// Out-of-sample RMSE on the validation month
    pub validation_rmse: f64,
    /// Where the fitted model and vectorizer were written
    pub artifacts: ArtifactPaths,
}

/// Execute one training run.
///
/// With no explicit reference date the current wall-clock date is used,
/// so a scheduled invocation picks its dataset months relative to the
/// moment it fires. The date is resolved here, once, and passed down
/// explicitly.
pub fn run(config: &RunConfig, reference_date: Option<&str>) -> Result<RunReport, PipelineError> {
    let reference_date = reference_date.map_or_else(today, str::to_string);
    info!(%reference_date, "starting training run");

    let paths = resolve_paths(&reference_date, &config.data_dir, &config.dataset_name)?;
    let categorical = CATEGORICAL_COLUMNS;
    let expected: Vec<&str> = [PICKUP_COLUMN, DROPOFF_COLUMN]
        .into_iter()
        .chain(categorical)
        .collect();

    info!(path = %paths.train.display(), "loading training month");
    let df_train = read_trips(&paths.train)?;
    require_columns(&df_train, &expected)?;
    let df_train = prepare_features(df_train, &categorical, Phase::Train)?;

    info!(path = %paths.validation.display(), "loading validation month");
    let df_val = read_trips(&paths.validation)?;
    require_columns(&df_val, &expected)?;
    let df_val = prepare_features(df_val, &categorical, Phase::Validation)?;

    let (model, dv) = train_model(&df_train, &categorical)?;
    let train_rmse = score_table(&df_train, &categorical, &dv, &model)?;
    let validation_rmse = evaluate_model(&df_val, &categorical, &dv, &model)?;

    let artifacts = save_artifacts(&config.artifact_dir, &reference_date, &model, &dv)?;

    info!(train_rmse, validation_rmse, "training run complete");
    Ok(RunReport {
        reference_date,
        train_rmse,
        validation_rmse,
        artifacts,
    })
}

/// Current wall-clock date in the reference-date format.
fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
