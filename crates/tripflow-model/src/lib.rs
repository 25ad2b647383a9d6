#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tripflow/tripflow/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod artifacts;
pub mod error;
pub mod evaluate;
pub mod metrics;
pub mod records;
pub mod regression;
pub mod train;
pub mod vectorizer;

pub use artifacts::{ArtifactPaths, artifact_paths, load_artifacts, save_artifacts};
pub use error::{ModelError, Result};
pub use evaluate::{evaluate_model, score_table};
pub use metrics::root_mean_squared_error;
pub use regression::LinearRegression;
pub use train::train_model;
pub use vectorizer::{DictVectorizer, SparseFeatures};
