//! Dict-style one-hot vectorizer over categorical columns.
//!
//! Each training record is the tuple of categorical values for one row.
//! Fitting assigns one feature per distinct `field=value` pair, ordered
//! lexicographically so refitting on identical input reproduces the same
//! feature space. Transforming is lookup-only: a value unseen at fit time
//! contributes nothing to its row, it never extends the vocabulary.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One-hot feature matrix in sparse row form.
///
/// Every active entry has value 1.0, so rows only carry the active column
/// indices, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseFeatures {
    n_features: usize,
    rows: Vec<Vec<usize>>,
}

impl SparseFeatures {
    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the feature space.
    pub const fn n_features(&self) -> usize {
        self.n_features
    }

    /// Active column indices per row.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }
}

/// Fitted categorical vectorizer.
///
/// The feature space is frozen at fit time; [`DictVectorizer::transform`]
/// takes `&self` and can never refit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictVectorizer {
    fields: Vec<String>,
    vocabulary: BTreeMap<String, usize>,
}

impl DictVectorizer {
    /// Fit a vectorizer over records of categorical values.
    ///
    /// `records` holds one row per table row, each aligned with `fields`.
    pub fn fit(fields: &[&str], records: &[Vec<String>]) -> Self {
        let mut keys = BTreeSet::new();
        for record in records {
            for (field, value) in fields.iter().zip(record) {
                keys.insert(feature_key(field, value));
            }
        }

        let vocabulary = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect();

        Self {
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            vocabulary,
        }
    }

    /// Number of distinct `field=value` pairs observed at fit time.
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Learned feature names, in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        // BTreeMap iterates keys in lexicographic order, which is exactly
        // the column order the indices were assigned in.
        self.vocabulary.keys().map(String::as_str).collect()
    }

    /// Categorical fields this vectorizer was fit over.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// One-hot encode records through the frozen vocabulary.
    ///
    /// Unseen values are dropped from their row (all-zero contribution).
    pub fn transform(&self, records: &[Vec<String>]) -> Result<SparseFeatures> {
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            if record.len() != self.fields.len() {
                return Err(ModelError::DimensionMismatch(format!(
                    "record has {} values, vectorizer was fit over {} fields",
                    record.len(),
                    self.fields.len()
                )));
            }

            let mut active: Vec<usize> = self
                .fields
                .iter()
                .zip(record)
                .filter_map(|(field, value)| {
                    self.vocabulary.get(&feature_key(field, value)).copied()
                })
                .collect();
            active.sort_unstable();
            rows.push(active);
        }

        Ok(SparseFeatures {
            n_features: self.vocabulary.len(),
            rows,
        })
    }
}

fn feature_key(field: &str, value: &str) -> String {
    format!("{field}={value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [&str; 2] = ["PUlocationID", "DOlocationID"];

    fn records() -> Vec<Vec<String>> {
        vec![
            vec!["1".to_string(), "9".to_string()],
            vec!["2".to_string(), "9".to_string()],
            vec!["1".to_string(), "-1".to_string()],
        ]
    }

    #[test]
    fn test_feature_count_is_distinct_pairs() {
        let dv = DictVectorizer::fit(&FIELDS, &records());
        // PU: {1, 2}, DO: {9, -1}
        assert_eq!(dv.n_features(), 4);
        assert_eq!(
            dv.feature_names(),
            vec![
                "DOlocationID=-1",
                "DOlocationID=9",
                "PUlocationID=1",
                "PUlocationID=2",
            ]
        );
    }

    #[test]
    fn test_refit_is_deterministic() {
        let a = DictVectorizer::fit(&FIELDS, &records());
        let b = DictVectorizer::fit(&FIELDS, &records());
        assert_eq!(a, b);
    }

    #[test]
    fn test_transform_one_hot() {
        let dv = DictVectorizer::fit(&FIELDS, &records());
        let x = dv.transform(&records()).unwrap();

        assert_eq!(x.n_rows(), 3);
        assert_eq!(x.n_features(), 4);
        // Each row activates exactly one feature per field.
        for row in x.rows() {
            assert_eq!(row.len(), 2);
        }
        assert_eq!(x.rows()[0], vec![1, 2]); // DO=9, PU=1
        assert_eq!(x.rows()[2], vec![0, 2]); // DO=-1, PU=1
    }

    #[test]
    fn test_unseen_value_is_all_zero() {
        let dv = DictVectorizer::fit(&FIELDS, &records());
        let unseen = vec![vec!["777".to_string(), "888".to_string()]];
        let x = dv.transform(&unseen).unwrap();

        assert_eq!(x.n_features(), 4);
        assert!(x.rows()[0].is_empty());
        // The vocabulary is untouched by transform.
        assert_eq!(dv.n_features(), 4);
    }

    #[test]
    fn test_misaligned_record_rejected() {
        let dv = DictVectorizer::fit(&FIELDS, &records());
        let bad = vec![vec!["1".to_string()]];
        assert!(matches!(
            dv.transform(&bad),
            Err(ModelError::DimensionMismatch(_))
        ));
    }
}
