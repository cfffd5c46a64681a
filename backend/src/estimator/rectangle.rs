//! Rectangle (Riemann sum) estimator
//!
//! The quarter circle `y = sqrt(1 - x^2)` on `[0, 1]` has area π/4. Splitting
//! the interval into `n` equal-width rectangles gives two bounds:
//!
//! - **Underestimate**: heights sampled at the right edge, `x_i = i/n` for
//!   `i = 1..=n`. The curve is decreasing so every rectangle sits below it.
//! - **Overestimate**: heights sampled at the left edge, `x_i = i/n` for
//!   `i = 0..n`. Every rectangle pokes above the curve.
//!
//! Both return `sum * (1/n) * 4`. The combined estimate is their mean.
//!
//! # Critical Invariants
//!
//! - `underestimate(n) <= π <= overestimate(n)` for every `n > 0`
//! - `combined(n) == (underestimate(n) + overestimate(n)) / 2` bit for bit
//! - `n = 0` is rejected, there is no division by zero

use super::{NoProgress, ProgressObserver, PROGRESS_INTERVAL};
use crate::core::iterations::validate_divisor;
use crate::core::EstimateError;
use serde::Serialize;

/// Both rectangle bounds for one iteration count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleEstimate {
    /// Right-edge sum
    pub under: f64,
    /// Left-edge sum
    pub over: f64,
}

impl RectangleEstimate {
    /// Mean of both bounds
    pub fn mean(&self) -> f64 {
        (self.under + self.over) / 2.0
    }
}

/// Right-edge Riemann sum, always at or below π
///
/// # Example
/// ```
/// use pi_estimator_core::estimator::underestimate_pi;
///
/// let pi = underestimate_pi(4).unwrap();
/// assert!((pi - 2.4957).abs() < 1e-4);
/// ```
pub fn underestimate_pi(n: i64) -> Result<f64, EstimateError> {
    underestimate_pi_with_progress(n, &mut NoProgress)
}

pub fn underestimate_pi_with_progress(
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<f64, EstimateError> {
    let n = validate_divisor(n)?;
    Ok(quarter_circle_sum(1..=n, n, progress))
}

/// Left-edge Riemann sum, always at or above π
///
/// # Example
/// ```
/// use pi_estimator_core::estimator::overestimate_pi;
///
/// let pi = overestimate_pi(4).unwrap();
/// assert!((pi - 3.4957).abs() < 1e-4);
/// ```
pub fn overestimate_pi(n: i64) -> Result<f64, EstimateError> {
    overestimate_pi_with_progress(n, &mut NoProgress)
}

pub fn overestimate_pi_with_progress(
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<f64, EstimateError> {
    let n = validate_divisor(n)?;
    Ok(quarter_circle_sum(0..n, n, progress))
}

/// Both bounds for `n` rectangles
pub fn rectangle_pi(n: i64) -> Result<RectangleEstimate, EstimateError> {
    rectangle_pi_with_progress(n, &mut NoProgress)
}

/// Both bounds, reporting progress of each pass to the same observer
pub fn rectangle_pi_with_progress(
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<RectangleEstimate, EstimateError> {
    let under = underestimate_pi_with_progress(n, progress)?;
    let over = overestimate_pi_with_progress(n, progress)?;
    Ok(RectangleEstimate { under, over })
}

/// Mean of the under- and overestimate
///
/// # Example
/// ```
/// use pi_estimator_core::estimator::{combined_pi, overestimate_pi, underestimate_pi};
///
/// let n = 1_000;
/// let mean = (underestimate_pi(n).unwrap() + overestimate_pi(n).unwrap()) / 2.0;
/// assert_eq!(combined_pi(n).unwrap(), mean);
/// ```
pub fn combined_pi(n: i64) -> Result<f64, EstimateError> {
    combined_pi_with_progress(n, &mut NoProgress)
}

pub fn combined_pi_with_progress(
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<f64, EstimateError> {
    rectangle_pi_with_progress(n, progress).map(|estimate| estimate.mean())
}

/// Sum `sqrt(1 - (i/n)^2)` over `indices` and scale by `4/n`
fn quarter_circle_sum(
    indices: impl Iterator<Item = u64>,
    n: u64,
    progress: &mut dyn ProgressObserver,
) -> f64 {
    let n_f = n as f64;
    let width = 1.0 / n_f;

    let mut sum = 0.0;
    for i in indices {
        let x = i as f64 / n_f;
        sum += (1.0 - x * x).sqrt();

        if i % PROGRESS_INTERVAL == 0 {
            progress.on_progress(i, n);
        }
    }
    progress.on_finish();

    sum * width * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rectangle() {
        // n = 1: right edge samples x = 1 (height 0), left edge samples x = 0 (height 1)
        assert_eq!(underestimate_pi(1).unwrap(), 0.0);
        assert_eq!(overestimate_pi(1).unwrap(), 4.0);
        assert_eq!(combined_pi(1).unwrap(), 2.0);
    }

    #[test]
    fn test_bounds_differ_by_first_rectangle() {
        // The two sums share every sample except x = 0 and x = 1
        let estimate = rectangle_pi(8).unwrap();
        assert!((estimate.over - estimate.under - 4.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rejected() {
        assert!(underestimate_pi(0).is_err());
        assert!(overestimate_pi(0).is_err());
        assert!(combined_pi(0).is_err());
    }
}
