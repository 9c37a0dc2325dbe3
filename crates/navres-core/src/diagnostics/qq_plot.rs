//! Q-Q plot coordinates for visual normality assessment
//!
//! Pairs each sorted residual with the standard-normal quantile expected at
//! its rank, so the chart layer can draw the scatter against the identity
//! line without touching any statistics.

use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, EvalResult};
use crate::normal::normal_quantile;

/// One point of a quantile-quantile plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QQPoint {
    /// Standard-normal quantile at this rank
    pub theoretical_quantile: f64,
    /// Residual standardized by the sample mean and std
    pub standardized_sample: f64,
    /// Residual value before standardization
    pub original_value: f64,
    /// Rank in the sorted series, 1..=n
    pub rank: usize,
}

/// Build Q-Q plot coordinates for a residual series
///
/// Residuals are sorted on a copy and standardized with the population
/// mean and standard deviation; a zero standard deviation is substituted
/// with 1 so constant series still plot. Theoretical quantiles use the
/// midpoint plotting position `(i + 0.5) / n`. Output length always equals
/// input length and ranks ascend, so `standardized_sample` is
/// non-decreasing.
pub fn qq_plot(residuals: &[f64]) -> EvalResult<Vec<QQPoint>> {
    let n = residuals.len();
    if n == 0 {
        return Err(EvalError::EmptyInput { field: "residuals" });
    }
    if residuals.iter().any(|v| !v.is_finite()) {
        return Err(EvalError::InvalidInput(
            "residual series contains non-finite values".into(),
        ));
    }

    let mut sorted = residuals.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let nf = n as f64;
    let mean = sorted.iter().sum::<f64>() / nf;
    let variance = sorted.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / nf;
    let std = variance.sqrt();
    let denom = if std > 0.0 { std } else { 1.0 };

    let points = sorted
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let p = (i as f64 + 0.5) / nf;
            QQPoint {
                theoretical_quantile: normal_quantile(p),
                standardized_sample: (value - mean) / denom,
                original_value: value,
                rank: i + 1,
            }
        })
        .collect();

    Ok(points)
}
