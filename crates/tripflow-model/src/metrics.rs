//! Error metrics.

use crate::error::{ModelError, Result};

/// Root mean squared error between true and predicted targets.
pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(ModelError::DimensionMismatch(format!(
            "{} true targets vs {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(ModelError::DimensionMismatch(
            "RMSE of zero samples".to_string(),
        ));
    }

    let mse = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum::<f64>()
        / y_true.len() as f64;

    Ok(mse.sqrt())
}
