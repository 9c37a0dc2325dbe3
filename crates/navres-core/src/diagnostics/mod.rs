//! Diagnostic functions for forecast residuals

mod descriptive;
mod qq_plot;
mod residuals;

pub use descriptive::{residual_stats, ResidualStats};
pub use qq_plot::{qq_plot, QQPoint};
pub use residuals::compute_residuals;
