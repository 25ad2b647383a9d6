//! Out-of-sample evaluation.

use crate::error::Result;
use crate::metrics::root_mean_squared_error;
use crate::records::{duration_targets, extract_records};
use crate::regression::LinearRegression;
use crate::vectorizer::DictVectorizer;
use polars::prelude::DataFrame;
use tracing::info;

/// RMSE of a prepared table scored through fitted artifacts, no logging.
pub fn score_table(
    df: &DataFrame,
    categorical: &[&str],
    dv: &DictVectorizer,
    model: &LinearRegression,
) -> Result<f64> {
    let records = extract_records(df, categorical)?;
    let x = dv.transform(&records)?;
    let y = duration_targets(df)?;
    let y_pred = model.predict(&x)?;
    root_mean_squared_error(&y, &y_pred)
}

/// Score a prepared validation table through the fitted artifacts.
///
/// Transform-only: the vectorizer and model are borrowed immutably and
/// never refit; location ids unseen at training time encode as all-zero
/// rows. Returns the validation RMSE so the driver can surface it in the
/// run report besides logging it.
pub fn evaluate_model(
    df: &DataFrame,
    categorical: &[&str],
    dv: &DictVectorizer,
    model: &LinearRegression,
) -> Result<f64> {
    let rmse = score_table(df, categorical, dv, model)?;
    info!(rmse, rows = df.height(), "validation RMSE");
    Ok(rmse)
}
