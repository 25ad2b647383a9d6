#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tripflow/tripflow/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;

pub use error::{DataError, Result};
pub use loader::{read_trips, require_columns};
pub use paths::{DatasetPaths, parse_reference_date, resolve_paths};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
