#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tripflow/tripflow/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod prepare;

pub use error::{FeatureError, Result};
pub use prepare::{
    DROPOFF_COLUMN, DURATION_COLUMN, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES, PICKUP_COLUMN,
    Phase, prepare_features,
};

/// Categorical location-id columns shared by preparation, training and
/// evaluation.
pub const CATEGORICAL_COLUMNS: [&str; 2] = ["PUlocationID", "DOlocationID"];
