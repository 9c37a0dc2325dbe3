//! Multi-channel evaluation and benchmark verdict
//!
//! Runs the normality test and descriptive statistics over every physical
//! error channel (radial, along-track, cross-track, clock), averages the
//! per-channel scores with equal weights, pools all residuals for an
//! independent overall row, and compares the averaged W against the fixed
//! benchmark.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{qq_plot, residual_stats, QQPoint, ResidualStats};
use crate::errors::{EvalError, EvalResult};
use crate::tests::{shapiro_wilk, NormalityTestResult};
use crate::types::{Benchmark, EvalOptions};

/// Evaluation of a single error channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEvaluation {
    /// Channel name (e.g. "radial", "clock")
    pub channel: String,
    /// Shapiro-Wilk normality result
    pub normality: NormalityTestResult,
    /// Descriptive residual statistics
    pub stats: ResidualStats,
    /// Q-Q plot coordinates, present only when requested
    pub qq_points: Option<Vec<QQPoint>>,
}

/// A channel excluded from the aggregate, with the condition flagged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedChannel {
    /// Channel name
    pub channel: String,
    /// Why the channel could not be evaluated
    pub reason: String,
}

/// Pooled and averaged results across all evaluated channels
///
/// `normality`/`stats` come from the pooled concatenation of every
/// evaluated channel's residuals; `average_w`/`average_p_value` are
/// unweighted means of the per-channel scores. The two views are computed
/// independently and may disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallEvaluation {
    /// Normality test over the pooled residuals
    pub normality: NormalityTestResult,
    /// Descriptive statistics over the pooled residuals
    pub stats: ResidualStats,
    /// Unweighted mean of per-channel W statistics
    pub average_w: f64,
    /// Unweighted mean of per-channel p-values
    pub average_p_value: f64,
}

/// Comparison of the averaged scores against the fixed benchmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkVerdict {
    /// Target average W
    pub target_w: f64,
    /// Target p-value
    pub target_p_value: f64,
    /// Target hypothesis decision
    pub target_hypothesis: u8,
    /// Whether `average_w >= target_w`
    pub meets_benchmark: bool,
}

impl BenchmarkVerdict {
    fn new(benchmark: &Benchmark, average_w: f64) -> Self {
        Self {
            target_w: benchmark.target_w,
            target_p_value: benchmark.target_p_value,
            target_hypothesis: benchmark.target_hypothesis,
            meets_benchmark: average_w >= benchmark.target_w,
        }
    }
}

/// Full evaluation report across channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEvaluation {
    /// Per-channel evaluations, keyed by channel name
    pub per_channel: BTreeMap<String, ChannelEvaluation>,
    /// Pooled and averaged results
    pub overall: OverallEvaluation,
    /// Benchmark comparison
    pub benchmark: BenchmarkVerdict,
    /// Channels excluded from the aggregate
    pub skipped: Vec<SkippedChannel>,
}

impl AggregateEvaluation {
    /// Generate a human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        if self.benchmark.meets_benchmark {
            report.push_str("BENCHMARK MET\n\n");
        } else {
            report.push_str("BENCHMARK NOT MET\n\n");
        }
        report.push_str(&format!(
            "Average W: {:.4} (target {:.4})\n",
            self.overall.average_w, self.benchmark.target_w
        ));
        report.push_str(&format!(
            "Average p-value: {:.4}\n",
            self.overall.average_p_value
        ));
        report.push_str(&format!(
            "Pooled: W={:.4}, p={:.4}, n={}\n",
            self.overall.normality.w, self.overall.normality.p_value, self.overall.stats.count
        ));

        report.push_str("\nChannels:\n");
        for (name, eval) in &self.per_channel {
            report.push_str(&format!(
                "  {} (W={:.4}, p={:.4}, hypothesis={}, n={})\n",
                name,
                eval.normality.w,
                eval.normality.p_value,
                eval.normality.hypothesis,
                eval.stats.count
            ));
        }

        if !self.skipped.is_empty() {
            report.push_str(&format!("\nSkipped channels ({}):\n", self.skipped.len()));
            for skip in &self.skipped {
                report.push_str(&format!("  - {}: {}\n", skip.channel, skip.reason));
            }
        }

        report
    }
}

/// Evaluate a single named channel
///
/// Runs the normality test and descriptive statistics; Q-Q coordinates are
/// generated only when `options.compute_qq_plots` is set.
pub fn evaluate_channel(
    name: &str,
    residuals: &[f64],
    options: &EvalOptions,
) -> EvalResult<ChannelEvaluation> {
    options.validate()?;

    let normality = shapiro_wilk(residuals, options.alpha)?;
    let stats = residual_stats(residuals)?;
    let qq_points = if options.compute_qq_plots {
        Some(qq_plot(residuals)?)
    } else {
        None
    };

    Ok(ChannelEvaluation {
        channel: name.to_string(),
        normality,
        stats,
        qq_points,
    })
}

/// Evaluate every channel and aggregate into one benchmark verdict
///
/// Channels with fewer than 3 residuals are skipped, recorded, and logged;
/// any other per-channel failure propagates. The pooled overall row
/// concatenates the evaluated channels' residuals, so the pooled sample
/// must stay within the normality test's supported range.
///
/// # Arguments
/// * `channels` - Map of channel name to residual series
/// * `options` - Evaluation options (significance level, benchmark)
///
/// # Returns
/// `AggregateEvaluation` with per-channel results, pooled/averaged scores,
/// and the benchmark verdict. `NoValidChannels` when every channel was
/// skipped.
pub fn evaluate_channels(
    channels: &BTreeMap<String, Vec<f64>>,
    options: &EvalOptions,
) -> EvalResult<AggregateEvaluation> {
    options.validate()?;
    if channels.is_empty() {
        return Err(EvalError::EmptyInput { field: "channels" });
    }

    let mut per_channel = BTreeMap::new();
    let mut skipped = Vec::new();
    let mut pooled = Vec::new();

    for (name, residuals) in channels {
        match evaluate_channel(name, residuals, options) {
            Ok(eval) => {
                tracing::debug!(
                    "Channel {} evaluated: W={:.4}, p={:.4}",
                    name,
                    eval.normality.w,
                    eval.normality.p_value
                );
                pooled.extend_from_slice(residuals);
                per_channel.insert(name.clone(), eval);
            }
            Err(err @ EvalError::InsufficientData { .. }) => {
                tracing::warn!("Skipping channel {}: {}", name, err);
                skipped.push(SkippedChannel {
                    channel: name.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    if per_channel.is_empty() {
        return Err(EvalError::NoValidChannels);
    }

    // Equal weighting regardless of channel sample size.
    let count = per_channel.len() as f64;
    let average_w = per_channel
        .values()
        .map(|c| c.normality.w)
        .sum::<f64>()
        / count;
    let average_p_value = per_channel
        .values()
        .map(|c| c.normality.p_value)
        .sum::<f64>()
        / count;

    // The pooled row mixes all evaluated residuals into one sample; it is
    // not derived from the per-channel scores and may disagree with them.
    let normality = shapiro_wilk(&pooled, options.alpha)?;
    let stats = residual_stats(&pooled)?;

    let benchmark = BenchmarkVerdict::new(&options.benchmark, average_w);

    Ok(AggregateEvaluation {
        per_channel,
        overall: OverallEvaluation {
            normality,
            stats,
            average_w,
            average_p_value,
        },
        benchmark,
        skipped,
    })
}
