//! Standard-normal approximations
//!
//! Rational approximations for the inverse CDF (Abramowitz & Stegun 26.2.23,
//! |error| < 4.5e-4) and the CDF (A&S 7.1.26 erf polynomial,
//! |error| < 1.5e-7), plus the Blom approximation for expected normal order
//! statistics. These back both the Shapiro-Wilk coefficients and the Q-Q
//! plot quantiles.

use std::f64::consts::SQRT_2;

/// Approximate the standard normal inverse CDF at probability `p`
///
/// Returns `NEG_INFINITY` for `p <= 0`, `INFINITY` for `p >= 1`, and exactly
/// `0.0` at the median. Elsewhere the lower half is obtained by negating the
/// upper-tail value at `p`, the upper half from the tail value at `1 - p`.
pub fn normal_quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    if p == 0.5 {
        return 0.0;
    }

    if p < 0.5 {
        -upper_tail_quantile(p)
    } else {
        upper_tail_quantile(1.0 - p)
    }
}

// A&S 26.2.23: z such that the upper-tail probability Q(z) = q, for
// q in (0, 0.5).
fn upper_tail_quantile(q: f64) -> f64 {
    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let t = (-2.0 * q.ln()).sqrt();
    t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t)
}

/// Approximate the standard normal CDF at `z`
///
/// Phi(z) = (1 + erf(z / sqrt(2))) / 2 with the erf polynomial of
/// A&S 7.1.26.
pub fn standard_normal_cdf(z: f64) -> f64 {
    const P: f64 = 0.327_591_1;
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;

    let x = z / SQRT_2;
    let t = 1.0 / (1.0 + P * x.abs());
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let erf_abs = 1.0 - poly * (-x * x).exp();

    if x >= 0.0 {
        0.5 * (1.0 + erf_abs)
    } else {
        0.5 * (1.0 - erf_abs)
    }
}

/// Expected value of the i-th order statistic of a standard normal sample
///
/// Uses the Blom plotting position `p = (i - 0.375) / (n + 0.25)` for
/// `1 <= i <= n`. Strictly increasing in `i` for fixed `n`.
pub fn normal_order_statistic(i: usize, n: usize) -> f64 {
    debug_assert!(i >= 1 && i <= n);
    let p = (i as f64 - 0.375) / (n as f64 + 0.25);
    normal_quantile(p)
}
