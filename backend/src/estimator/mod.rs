//! π estimators
//!
//! Two independent methods, each a pure function of an iteration count:
//!
//! - **series**: paired Leibniz series for π/4
//! - **rectangle**: Riemann sums of `sqrt(1 - x^2)` over `[0, 1]`
//!
//! # Progress
//!
//! The numeric loops never print. Every estimator has a `*_with_progress`
//! variant that reports to a [`ProgressObserver`] once every
//! [`PROGRESS_INTERVAL`] iterations and calls [`ProgressObserver::on_finish`]
//! when the loop ends.
//!
//! ```rust
//! use pi_estimator_core::estimator::{series_pi_with_progress, PROGRESS_INTERVAL};
//!
//! let mut calls = 0;
//! let mut observer = |_done: u64, _total: u64| calls += 1;
//! series_pi_with_progress(2 * PROGRESS_INTERVAL as i64, &mut observer).unwrap();
//! assert_eq!(calls, 2); // at i = 0 and i = PROGRESS_INTERVAL
//! ```

pub mod rectangle;
pub mod series;

use crate::core::EstimateError;
use serde::Serialize;
use std::fmt;

pub use rectangle::{
    combined_pi, combined_pi_with_progress, overestimate_pi, overestimate_pi_with_progress,
    rectangle_pi, rectangle_pi_with_progress, underestimate_pi, underestimate_pi_with_progress,
    RectangleEstimate,
};
pub use series::{series_pi, series_pi_with_progress};

/// Iterations between two progress notifications
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Receives progress notifications from an estimator loop
pub trait ProgressObserver {
    /// Called at loop position `completed` out of `total`
    fn on_progress(&mut self, completed: u64, total: u64);

    /// Called once after the loop finished
    fn on_finish(&mut self) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(u64, u64),
{
    fn on_progress(&mut self, completed: u64, total: u64) {
        self(completed, total)
    }
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _completed: u64, _total: u64) {}
}

/// Fraction of the loop completed, as a percentage
pub fn progress_percent(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Selects which estimator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimatorMethod {
    /// Paired Leibniz series
    Series,
    /// Right-edge rectangles (below the curve)
    Underestimate,
    /// Left-edge rectangles (above the curve)
    Overestimate,
    /// Mean of the under- and overestimate
    Combined,
}

impl EstimatorMethod {
    pub fn name(self) -> &'static str {
        match self {
            EstimatorMethod::Series => "series",
            EstimatorMethod::Underestimate => "underestimate",
            EstimatorMethod::Overestimate => "overestimate",
            EstimatorMethod::Combined => "combined",
        }
    }

    /// Run this estimator without progress reporting
    ///
    /// # Example
    /// ```
    /// use pi_estimator_core::EstimatorMethod;
    ///
    /// let pi = EstimatorMethod::Series.estimate(1).unwrap();
    /// assert!((pi - 8.0 / 3.0).abs() < 1e-15);
    /// ```
    pub fn estimate(self, n: i64) -> Result<f64, EstimateError> {
        self.estimate_with_progress(n, &mut NoProgress)
    }

    pub fn estimate_with_progress(
        self,
        n: i64,
        progress: &mut dyn ProgressObserver,
    ) -> Result<f64, EstimateError> {
        match self {
            EstimatorMethod::Series => series_pi_with_progress(n, progress),
            EstimatorMethod::Underestimate => underestimate_pi_with_progress(n, progress),
            EstimatorMethod::Overestimate => overestimate_pi_with_progress(n, progress),
            EstimatorMethod::Combined => combined_pi_with_progress(n, progress),
        }
    }
}

impl fmt::Display for EstimatorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
