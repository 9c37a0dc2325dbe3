//! Descriptive statistics for one channel's residual series

use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, EvalResult};

/// Descriptive statistics of a residual series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    /// Population variance (divide by n)
    pub variance: f64,
    /// Smallest residual
    pub min: f64,
    /// Largest residual
    pub max: f64,
    /// Sample skewness, 0.0 for a constant series
    pub skewness: f64,
    /// Excess kurtosis, 0.0 for a constant series
    pub kurtosis: f64,
    /// Number of residuals
    pub count: usize,
}

/// Compute descriptive statistics over a residual series
///
/// Central moments are accumulated in a single pass after the mean.
/// Skewness and excess kurtosis are reported as `0.0` when the series has
/// zero variance, so a constant channel still yields a finite report row.
pub fn residual_stats(residuals: &[f64]) -> EvalResult<ResidualStats> {
    let n = residuals.len();
    if n == 0 {
        return Err(EvalError::EmptyInput { field: "residuals" });
    }
    if residuals.iter().any(|v| !v.is_finite()) {
        return Err(EvalError::InvalidInput(
            "residual series contains non-finite values".into(),
        ));
    }

    let nf = n as f64;
    let mean = residuals.iter().sum::<f64>() / nf;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &x in residuals {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
        min = min.min(x);
        max = max.max(x);
    }

    m2 /= nf;
    m3 /= nf;
    m4 /= nf;

    let variance = m2;
    let std = variance.sqrt();

    let (skewness, kurtosis) = if std > 0.0 {
        (m3 / (std * std * std), m4 / (m2 * m2) - 3.0)
    } else {
        (0.0, 0.0)
    };

    Ok(ResidualStats {
        mean,
        std,
        variance,
        min,
        max,
        skewness,
        kurtosis,
        count: n,
    })
}
