//! Coarse-to-fine search over the iteration count
//!
//! # Algorithm
//!
//! ```text
//! best = f64::MAX
//! while step > 0:
//!     error = |estimate(n) - π|
//!     if error <= best:            improvement
//!         best = error
//!         n += step
//!     else:                        overshoot
//!         n -= 2 * step
//!         step /= 10
//!         n += step
//! return n
//! ```
//!
//! After an overshoot the search steps back past the last good point and
//! walks forward again with a step ten times smaller, until integer division
//! collapses the step to zero.
//!
//! # Heuristic
//!
//! This is not an exact optimum finder. It assumes the error is unimodal
//! around the optimum, i.e. it falls and then rises along `n`. For rounding
//! error that is an empirical observation, not a proven property. The best
//! error is never reset, so refining levels only move `best_n` when they hit
//! an error at least as small as the one found at a coarser level.
//!
//! # Bounds
//!
//! `n` only moves down on an overshoot. In the worst case every level
//! overshoots on its first evaluation, which leaves the search about
//! `1.12 * start_step` below `start_n`. [`SearchConfig::validate`] therefore
//! requires `start_n >= 2 * start_step`, and the loop still refuses to
//! evaluate any `n < 1`.

use crate::core::EstimateError;
use crate::estimator::EstimatorMethod;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Default starting iteration count
pub const DEFAULT_START_N: i64 = 90_000_000_000;

/// Default starting step
pub const DEFAULT_START_STEP: i64 = 1_000_000_000;

/// Starting point of a search
///
/// # Preconditions
/// - `start_n` and `start_step` are positive multiples of 10
/// - `start_n >= 2 * start_step`
///
/// # Example
/// ```
/// use pi_estimator_core::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.start_n, 90_000_000_000);
/// assert_eq!(config.start_step, 1_000_000_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    /// Iteration count evaluated first (known to be below the optimum)
    pub start_n: i64,
    /// Initial step size
    pub start_step: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start_n: DEFAULT_START_N,
            start_step: DEFAULT_START_STEP,
        }
    }
}

impl SearchConfig {
    pub fn new(start_n: i64, start_step: i64) -> Self {
        Self {
            start_n,
            start_step,
        }
    }

    /// Check the documented preconditions
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.start_n <= 0 {
            return Err(invalid(format!(
                "start_n must be positive (got {})",
                self.start_n
            )));
        }
        if self.start_step <= 0 {
            return Err(invalid(format!(
                "start_step must be positive (got {})",
                self.start_step
            )));
        }
        if self.start_n % 10 != 0 || self.start_step % 10 != 0 {
            return Err(invalid(format!(
                "start_n and start_step must be multiples of 10 (got {} and {})",
                self.start_n, self.start_step
            )));
        }
        match self.start_step.checked_mul(2) {
            Some(floor) if self.start_n >= floor => Ok(()),
            _ => Err(invalid(format!(
                "start_n must be at least twice start_step (got {} and {})",
                self.start_n, self.start_step
            ))),
        }
    }
}

/// Mutable state of a running search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchState {
    /// Iteration count evaluated next
    pub n: i64,
    /// Current step size
    pub step: i64,
    /// Smallest error seen so far
    pub best_error: f64,
    /// Iteration count that produced `best_error`
    pub best_n: i64,
}

impl SearchState {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            n: config.start_n,
            step: config.start_step,
            best_error: f64::MAX,
            best_n: config.start_n,
        }
    }

    pub fn is_done(&self) -> bool {
        self.step <= 0
    }

    /// Apply one observed error and move to the next `n`
    ///
    /// Returns `true` when the error counted as an improvement. A `NaN`
    /// error never does.
    ///
    /// # Errors
    /// `InvalidArgument` when the next `n` does not fit in an `i64`. The
    /// state is left unchanged in that case.
    pub fn advance(&mut self, error: f64) -> Result<bool, EstimateError> {
        if error <= self.best_error {
            let next = self
                .n
                .checked_add(self.step)
                .ok_or_else(|| self.overflow())?;
            self.best_error = error;
            self.best_n = self.n;
            self.n = next;
            Ok(true)
        } else {
            let step = self.step / 10;
            let next = self
                .step
                .checked_mul(2)
                .and_then(|back| self.n.checked_sub(back))
                .and_then(|n| n.checked_add(step))
                .ok_or_else(|| self.overflow())?;
            self.n = next;
            self.step = step;
            Ok(false)
        }
    }

    fn overflow(&self) -> EstimateError {
        invalid(format!(
            "search step overflows the iteration count (n = {}, step = {})",
            self.n, self.step
        ))
    }
}

/// One evaluation of the search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchRound {
    /// 1-based round number
    pub round: usize,
    /// Iteration count evaluated
    pub n: i64,
    /// Step size in effect when `n` was evaluated
    pub step: i64,
    /// Absolute error at `n`
    pub error: f64,
    /// Whether this round improved on the best error
    pub improved: bool,
}

/// Result of a finished search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Final iteration count, reported as the optimum
    pub n: i64,
    /// Final step size (always 0)
    pub step: i64,
    /// Iteration count with the smallest error evaluated
    pub best_n: i64,
    /// Smallest error evaluated
    pub best_error: f64,
    /// Number of evaluations
    pub rounds: usize,
}

/// Receives every round of a search
pub trait SearchObserver {
    fn on_round(&mut self, round: &SearchRound);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchRound),
{
    fn on_round(&mut self, round: &SearchRound) {
        self(round)
    }
}

/// Observer that ignores every round
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearchObserver;

impl SearchObserver for NoSearchObserver {
    fn on_round(&mut self, _round: &SearchRound) {}
}

/// Run the search against an arbitrary error function
///
/// `error_fn` maps an iteration count to an error. Smaller is better.
///
/// # Errors
/// - `InvalidArgument` if `config` breaks its preconditions
/// - `InvalidArgument` if the search would evaluate an `n < 1`
/// - `InvalidArgument` if the next `n` would overflow an `i64`
/// - any error returned by `error_fn`
///
/// # Example
/// ```
/// use pi_estimator_core::{find_optimum, NoSearchObserver, SearchConfig};
///
/// // Flat-bottomed valley between 150 and 159
/// let valley = |n: i64| Ok(((n - 150) as f64 / 10.0).abs().floor());
/// let outcome = find_optimum(&SearchConfig::new(100, 10), valley, &mut NoSearchObserver).unwrap();
/// assert_eq!(outcome.step, 0);
/// assert!((140..=160).contains(&outcome.n));
/// ```
pub fn find_optimum<F>(
    config: &SearchConfig,
    mut error_fn: F,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome, EstimateError>
where
    F: FnMut(i64) -> Result<f64, EstimateError>,
{
    config.validate()?;

    let mut state = SearchState::new(config);
    let mut rounds = 0;

    while !state.is_done() {
        if state.n < 1 {
            return Err(invalid(format!(
                "search moved below n = 1 (n = {}, step = {})",
                state.n, state.step
            )));
        }

        let (n, step) = (state.n, state.step);
        let error = error_fn(n)?;
        let improved = state.advance(error)?;
        rounds += 1;

        debug!(round = rounds, n, step, error, improved, "search round");
        observer.on_round(&SearchRound {
            round: rounds,
            n,
            step,
            error,
            improved,
        });
    }

    info!(
        n = state.n,
        best_n = state.best_n,
        best_error = state.best_error,
        rounds,
        "search finished"
    );

    Ok(SearchOutcome {
        n: state.n,
        step: state.step,
        best_n: state.best_n,
        best_error: state.best_error,
        rounds,
    })
}

/// Which rectangle estimate the optimizer evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiemannVariant {
    Under,
    #[default]
    Over,
    Both,
}

impl RiemannVariant {
    pub fn method(self) -> EstimatorMethod {
        match self {
            RiemannVariant::Under => EstimatorMethod::Underestimate,
            RiemannVariant::Over => EstimatorMethod::Overestimate,
            RiemannVariant::Both => EstimatorMethod::Combined,
        }
    }
}

impl fmt::Display for RiemannVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiemannVariant::Under => "under",
            RiemannVariant::Over => "over",
            RiemannVariant::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for RiemannVariant {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under" => Ok(RiemannVariant::Under),
            "over" => Ok(RiemannVariant::Over),
            "both" => Ok(RiemannVariant::Both),
            other => Err(invalid(format!("unknown Riemann variant '{}'", other))),
        }
    }
}

/// Search for the rectangle count with the smallest error against π
pub fn find_optimum_n(
    config: &SearchConfig,
    variant: RiemannVariant,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome, EstimateError> {
    let method = variant.method();
    find_optimum(
        config,
        |n| method.estimate(n).map(|pi| (pi - PI).abs()),
        observer,
    )
}

fn invalid(message: String) -> EstimateError {
    EstimateError::InvalidArgument(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_round_always_improves() {
        let mut state = SearchState::new(&SearchConfig::new(100, 10));
        assert!(state.advance(1e300).unwrap());
        assert_eq!(state.n, 110);
        assert_eq!(state.best_n, 100);
    }

    #[test]
    fn test_overshoot_rolls_back_and_shrinks() {
        let mut state = SearchState::new(&SearchConfig::new(100, 10));
        state.advance(5.0).unwrap();
        assert!(!state.advance(6.0).unwrap());
        // 110 - 20 + 1
        assert_eq!(state.n, 91);
        assert_eq!(state.step, 1);
        assert_eq!(state.best_n, 100);
    }

    #[test]
    fn test_nan_counts_as_overshoot() {
        let mut state = SearchState::new(&SearchConfig::new(100, 10));
        assert!(!state.advance(f64::NAN).unwrap());
        assert_eq!(state.best_error, f64::MAX);
    }

    #[test]
    fn test_last_level_collapses_step() {
        let mut state = SearchState::new(&SearchConfig::new(100, 10));
        state.step = 1;
        state.best_error = 0.0;
        state.advance(1.0).unwrap();
        assert_eq!(state.step, 0);
        assert_eq!(state.n, 98);
        assert!(state.is_done());
    }

    #[test]
    fn test_overflow_leaves_state_untouched() {
        let mut state = SearchState::new(&SearchConfig::new(i64::MAX - 7, 10));
        assert!(state.advance(0.0).is_err());
        assert_eq!(state.n, i64::MAX - 7);
        assert_eq!(state.best_error, f64::MAX);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("over".parse::<RiemannVariant>().unwrap(), RiemannVariant::Over);
        assert_eq!(RiemannVariant::default(), RiemannVariant::Over);
        assert!("sideways".parse::<RiemannVariant>().is_err());
    }
}
