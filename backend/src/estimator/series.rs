//! Series estimator
//!
//! Leibniz series for π/4 with each positive and negative term paired:
//!
//! ```text
//! π/4 = Σ_{i=0}^{n-1} [ 1/(4i+1) - 1/(4i+3) ]
//! ```
//!
//! `n` therefore counts pairs, so `n` iterations evaluate `2n` terms.

use super::{NoProgress, ProgressObserver, PROGRESS_INTERVAL};
use crate::core::{validate_iterations, EstimateError};

/// Estimate π from `n` pairs of series terms
///
/// # Errors
/// `InvalidArgument` when `n` is negative or above `i64::MAX - 1`.
///
/// # Example
/// ```
/// use pi_estimator_core::estimator::series_pi;
///
/// assert_eq!(series_pi(0).unwrap(), 0.0);
/// assert!((series_pi(1).unwrap() - 8.0 / 3.0).abs() < 1e-15);
/// ```
pub fn series_pi(n: i64) -> Result<f64, EstimateError> {
    series_pi_with_progress(n, &mut NoProgress)
}

/// Same as [`series_pi`], reporting progress every `PROGRESS_INTERVAL` pairs
pub fn series_pi_with_progress(
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<f64, EstimateError> {
    let n = validate_iterations(n)?;

    let mut sum = 0.0;
    let mut dividend = 1.0_f64;
    for i in 0..n {
        sum += (1.0 / dividend) - (1.0 / (dividend + 2.0));
        dividend += 4.0;

        if i % PROGRESS_INTERVAL == 0 {
            progress.on_progress(i, n);
        }
    }
    progress.on_finish();

    Ok(sum * 4.0)
}
