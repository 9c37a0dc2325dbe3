use thiserror::Error;

/// Errors that can occur during residual evaluation
#[derive(Error, Debug)]
pub enum EvalError {
    // Input validation errors
    #[error("Invalid significance level: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    #[error("Insufficient data: {actual} residuals (need at least {required})")]
    InsufficientData { required: usize, actual: usize },

    #[error("Dimension mismatch: predicted has {predicted} elements, actual has {actual}")]
    DimensionMismatch { predicted: usize, actual: usize },

    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Aggregation errors
    #[error("No channel could be evaluated")]
    NoValidChannels,
}

/// Result type for residual evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;
