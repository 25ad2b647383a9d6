//! Model training.

use crate::error::{ModelError, Result};
use crate::metrics::root_mean_squared_error;
use crate::records::{duration_targets, extract_records};
use crate::regression::LinearRegression;
use crate::vectorizer::DictVectorizer;
use polars::prelude::DataFrame;
use tracing::info;

/// Fit the vectorizer and linear model on a prepared training table.
///
/// The vectorizer is fit exactly once per run, here; everything downstream
/// reuses it transform-only. An empty prepared table or a degenerate
/// system aborts the run, there are no retries.
pub fn train_model(
    df: &DataFrame,
    categorical: &[&str],
) -> Result<(LinearRegression, DictVectorizer)> {
    let records = extract_records(df, categorical)?;
    if records.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }

    let dv = DictVectorizer::fit(categorical, &records);
    let x_train = dv.transform(&records)?;
    let y_train = duration_targets(df)?;

    info!(
        rows = x_train.n_rows(),
        columns = x_train.n_features(),
        "training design matrix shape"
    );
    info!(features = dv.n_features(), "vectorizer fitted");

    let model = LinearRegression::fit(&x_train, &y_train)?;

    let y_pred = model.predict(&x_train)?;
    let rmse = root_mean_squared_error(&y_train, &y_pred)?;
    info!(rmse, "training RMSE");

    Ok((model, dv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use tripflow_features::DURATION_COLUMN;

    fn prepared_frame(pu: &[&str], do_: &[&str], durations: &[f64]) -> DataFrame {
        DataFrame::new(vec![
            Column::new("PUlocationID".into(), pu),
            Column::new("DOlocationID".into(), do_),
            Column::new(DURATION_COLUMN.into(), durations),
        ])
        .unwrap()
    }

    const CATEGORICAL: [&str; 2] = ["PUlocationID", "DOlocationID"];

    #[test]
    fn test_train_fits_over_distinct_pairs() {
        let df = prepared_frame(
            &["1", "2", "1", "3"],
            &["9", "9", "8", "-1"],
            &[10.0, 20.0, 15.0, 30.0],
        );
        let (model, dv) = train_model(&df, &CATEGORICAL).unwrap();

        // PU: {1, 2, 3}, DO: {9, 8, -1}
        assert_eq!(dv.n_features(), 6);
        assert_eq!(model.coefficients().len(), 6);
    }

    #[test]
    fn test_train_is_deterministic() {
        let df = prepared_frame(&["1", "2", "1"], &["9", "8", "9"], &[12.0, 25.0, 14.0]);
        let (model_a, dv_a) = train_model(&df, &CATEGORICAL).unwrap();
        let (model_b, dv_b) = train_model(&df, &CATEGORICAL).unwrap();

        assert_eq!(dv_a, dv_b);
        assert_eq!(model_a, model_b);
    }

    #[test]
    fn test_training_rmse_is_finite() {
        let df = prepared_frame(&["1", "2"], &["9", "8"], &[12.0, 25.0]);
        let (model, dv) = train_model(&df, &CATEGORICAL).unwrap();

        let records = extract_records(&df, &CATEGORICAL).unwrap();
        let pred = model.predict(&dv.transform(&records).unwrap()).unwrap();
        let rmse = root_mean_squared_error(&duration_targets(&df).unwrap(), &pred).unwrap();
        assert!(rmse.is_finite());
    }

    #[test]
    fn test_empty_table_rejected() {
        let df = prepared_frame(&[], &[], &[]);
        assert!(matches!(
            train_model(&df, &CATEGORICAL),
            Err(ModelError::EmptyTrainingSet)
        ));
    }
}
