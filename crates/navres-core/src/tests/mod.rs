//! Statistical hypothesis testing
//!
//! - Shapiro-Wilk test (normality), with a Royston-style continuous
//!   p-value approximation instead of exact table lookup


pub use distributional::{shapiro_wilk, shapiro_wilk_coefficients};

use serde::{Deserialize, Serialize};

/// Result of a normality hypothesis test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalityTestResult {
    /// Shapiro-Wilk W statistic, clamped to (0, 1]
    pub w: f64,
    /// p-value in [0, 1]
    pub p_value: f64,
    /// Hypothesis decision: 0 = consistent with normality, 1 = rejected
    pub hypothesis: u8,
    /// Whether the null hypothesis of normality is rejected at alpha
    pub reject_null: bool,
}
