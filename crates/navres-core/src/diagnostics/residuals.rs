//! Residual derivation from forecast/truth pairs

use crate::errors::{EvalError, EvalResult};

/// Compute residuals from predicted and actual values
///
/// The engine's convention is `residual = predicted - actual`, element-wise
/// over one channel. This is the boundary between the upstream forecast
/// producer and the strict residual contract of the evaluation core; any
/// field-name normalization or record cleaning belongs upstream of it.
pub fn compute_residuals(predicted: &[f64], actual: &[f64]) -> EvalResult<Vec<f64>> {
    if predicted.is_empty() {
        return Err(EvalError::EmptyInput { field: "predicted" });
    }
    if predicted.len() != actual.len() {
        return Err(EvalError::DimensionMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }

    Ok(predicted
        .iter()
        .zip(actual)
        .map(|(p, a)| p - a)
        .collect())
}
