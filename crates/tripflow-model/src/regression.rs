//! Linear regression on one-hot features by normal equations.
//!
//! The design matrix is one-hot, so X^T X and X^T y are accumulated
//! directly from the sparse rows without materializing X. The system is
//! solved by a Cholesky factorization; one-hot blocks plus an intercept
//! make X^T X rank-deficient, so a small diagonal jitter (scaled to the
//! mean diagonal) keeps the factorization well-posed while staying
//! deterministic across refits.

use crate::error::{ModelError, Result};
use crate::vectorizer::SparseFeatures;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Relative diagonal jitter applied before factorizing X^T X.
const JITTER_SCALE: f64 = 1e-8;

/// Escalation attempts before a fit is declared degenerate.
const MAX_JITTER_ATTEMPTS: u32 = 3;

/// Fitted linear regression with intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Fit by normal equations against `y`.
    ///
    /// Fails with [`ModelError::EmptyTrainingSet`] on an empty design and
    /// [`ModelError::DegenerateFit`] if the factorization still breaks
    /// down after jitter escalation. No retries beyond that; a fit
    /// failure is fatal for the run.
    pub fn fit(x: &SparseFeatures, y: &[f64]) -> Result<Self> {
        if x.n_rows() == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }
        if x.n_rows() != y.len() {
            return Err(ModelError::DimensionMismatch(format!(
                "{} feature rows vs {} targets",
                x.n_rows(),
                y.len()
            )));
        }

        // Intercept lives in the last column of the augmented system.
        let dim = x.n_features() + 1;
        let intercept_idx = dim - 1;

        let mut xtx = Array2::<f64>::zeros((dim, dim));
        let mut xty = Array1::<f64>::zeros(dim);

        for (row, &target) in x.rows().iter().zip(y) {
            for &i in row {
                for &j in row {
                    xtx[[i, j]] += 1.0;
                }
                xtx[[i, intercept_idx]] += 1.0;
                xtx[[intercept_idx, i]] += 1.0;
                xty[i] += target;
            }
            xtx[[intercept_idx, intercept_idx]] += 1.0;
            xty[intercept_idx] += target;
        }

        let mean_diag = xtx.diag().sum() / dim as f64;
        let base_jitter = JITTER_SCALE * mean_diag.max(1.0);

        for attempt in 0..MAX_JITTER_ATTEMPTS {
            let jitter = base_jitter * 10f64.powi(attempt as i32);
            let mut system = xtx.clone();
            for d in 0..dim {
                system[[d, d]] += jitter;
            }
            if let Some(factor) = cholesky(&system) {
                let solution = solve_with_factor(&factor, &xty);
                let intercept = solution[intercept_idx];
                let coefficients = solution.iter().take(intercept_idx).copied().collect();
                return Ok(Self {
                    coefficients,
                    intercept,
                });
            }
        }

        Err(ModelError::DegenerateFit(format!(
            "normal equations not positive definite after {MAX_JITTER_ATTEMPTS} jitter attempts"
        )))
    }

    /// Predict targets for rows encoded in the same feature space.
    pub fn predict(&self, x: &SparseFeatures) -> Result<Vec<f64>> {
        if x.n_features() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch(format!(
                "{} feature columns vs {} coefficients",
                x.n_features(),
                self.coefficients.len()
            )));
        }

        Ok(x.rows()
            .iter()
            .map(|row| {
                self.intercept + row.iter().map(|&i| self.coefficients[i]).sum::<f64>()
            })
            .collect())
    }

    /// Fitted coefficients, one per vectorizer feature.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Fitted intercept.
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }
}

/// Lower-triangular Cholesky factor of a symmetric matrix.
///
/// Returns `None` if a pivot is not strictly positive.
fn cholesky(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[[i, j]] = sum.sqrt();
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }

    Some(l)
}

/// Solve L L^T x = b by forward then back substitution.
fn solve_with_factor(l: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let n = l.nrows();

    let mut y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * y[k];
        }
        y[i] = sum / l[[i, i]];
    }

    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = y[i];
        for k in (i + 1)..n {
            sum -= l[[k, i]] * x[k];
        }
        x[i] = sum / l[[i, i]];
    }

    x
}
