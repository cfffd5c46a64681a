//! Driver - resolve the iteration count, run an estimator, time it
//!
//! The driver owns no I/O. Callers pass a [`ProgressObserver`] for loop
//! progress and render the returned [`EstimateReport`] however they like.

use crate::core::{parse_iterations, ElapsedTime, EstimateError};
use crate::estimator::{
    rectangle_pi_with_progress, EstimatorMethod, ProgressObserver, RectangleEstimate,
};
use serde::Serialize;
use std::f64::consts::PI;
use std::time::Instant;
use tracing::info;

/// Default iteration count when none is supplied
pub const DEFAULT_ITERATIONS: i64 = 1_000_000_000;

/// Driver configuration
///
/// # Example
/// ```
/// use pi_estimator_core::{resolve_iterations, DriverConfig};
///
/// let config = DriverConfig::default();
/// assert_eq!(resolve_iterations(None, &config).unwrap(), 1_000_000_000);
/// assert_eq!(resolve_iterations(Some("1000"), &config).unwrap(), 1000);
/// assert!(resolve_iterations(Some("abc"), &config).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DriverConfig {
    /// Iteration count used when no argument is given
    pub default_iterations: i64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            default_iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl DriverConfig {
    pub fn with_default_iterations(default_iterations: i64) -> Self {
        Self { default_iterations }
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        crate::core::validate_iterations(self.default_iterations).map(|_| ())
    }
}

/// Pick the iteration count from an optional argument
pub fn resolve_iterations(
    arg: Option<&str>,
    config: &DriverConfig,
) -> Result<i64, EstimateError> {
    match arg {
        Some(raw) => parse_iterations(raw),
        None => {
            config.validate()?;
            Ok(config.default_iterations)
        }
    }
}

/// Result of one timed estimator run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateReport {
    pub method: EstimatorMethod,
    pub iterations: i64,
    pub estimate: f64,
    /// Reference value of π
    pub reference: f64,
    /// `estimate - reference`
    pub difference: f64,
    pub elapsed: ElapsedTime,
}

impl EstimateReport {
    pub fn new(
        method: EstimatorMethod,
        iterations: i64,
        estimate: f64,
        elapsed: ElapsedTime,
    ) -> Self {
        Self {
            method,
            iterations,
            estimate,
            reference: PI,
            difference: estimate - PI,
            elapsed,
        }
    }
}

/// Run `method` at `n` iterations and time it
///
/// # Example
/// ```
/// use pi_estimator_core::{run_estimate, EstimatorMethod, NoProgress};
///
/// let report = run_estimate(EstimatorMethod::Series, 1000, &mut NoProgress).unwrap();
/// assert!(report.difference.abs() < 1e-3);
/// assert_eq!(report.difference, report.estimate - std::f64::consts::PI);
/// ```
pub fn run_estimate(
    method: EstimatorMethod,
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<EstimateReport, EstimateError> {
    let start = Instant::now();
    let estimate = method.estimate_with_progress(n, progress)?;
    let report = EstimateReport::new(method, n, estimate, ElapsedTime::since(start));

    info!(
        method = %method,
        n,
        estimate,
        difference = report.difference,
        "estimate finished"
    );
    Ok(report)
}

/// Rectangle run with both bounds kept alongside the combined report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleReport {
    pub bounds: RectangleEstimate,
    /// Report for the combined (mean) estimate
    pub combined: EstimateReport,
}

impl RectangleReport {
    /// Report for the underestimate alone (shares the total elapsed time)
    pub fn under(&self) -> EstimateReport {
        EstimateReport::new(
            EstimatorMethod::Underestimate,
            self.combined.iterations,
            self.bounds.under,
            self.combined.elapsed,
        )
    }

    /// Report for the overestimate alone (shares the total elapsed time)
    pub fn over(&self) -> EstimateReport {
        EstimateReport::new(
            EstimatorMethod::Overestimate,
            self.combined.iterations,
            self.bounds.over,
            self.combined.elapsed,
        )
    }
}

/// Run both rectangle passes at `n` and time the pair
pub fn run_rectangle(
    n: i64,
    progress: &mut dyn ProgressObserver,
) -> Result<RectangleReport, EstimateError> {
    let start = Instant::now();
    let bounds = rectangle_pi_with_progress(n, progress)?;
    let combined = EstimateReport::new(
        EstimatorMethod::Combined,
        n,
        bounds.mean(),
        ElapsedTime::since(start),
    );

    info!(
        n,
        under = bounds.under,
        over = bounds.over,
        combined = combined.estimate,
        "rectangle estimate finished"
    );
    Ok(RectangleReport { bounds, combined })
}
