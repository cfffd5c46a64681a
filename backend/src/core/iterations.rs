//! Iteration count validation
//!
//! Every public numeric entry point accepts an `i64` iteration count and
//! validates it here before looping. Accepted range is `0..=i64::MAX - 1`.

use thiserror::Error;

/// Largest iteration count accepted by any estimator
pub const MAX_ITERATIONS: i64 = i64::MAX - 1;

/// Errors raised by estimators, the optimizer and argument parsing
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EstimateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Validate an iteration count and return it as `u64`
///
/// # Errors
/// `InvalidArgument` when `n` is negative or greater than [`MAX_ITERATIONS`].
///
/// # Example
/// ```
/// use pi_estimator_core::validate_iterations;
///
/// assert_eq!(validate_iterations(1_000).unwrap(), 1_000);
/// assert!(validate_iterations(-1).is_err());
/// assert!(validate_iterations(i64::MAX).is_err());
/// ```
pub fn validate_iterations(n: i64) -> Result<u64, EstimateError> {
    if !(0..=MAX_ITERATIONS).contains(&n) {
        return Err(EstimateError::InvalidArgument(format!(
            "n must be between 0 and {} (got {})",
            MAX_ITERATIONS, n
        )));
    }
    Ok(n as u64)
}

/// Validate an iteration count that is also used as a divisor
///
/// Same range as [`validate_iterations`] but zero is rejected too.
pub(crate) fn validate_divisor(n: i64) -> Result<u64, EstimateError> {
    let n = validate_iterations(n)?;
    if n == 0 {
        return Err(EstimateError::InvalidArgument(
            "n must be greater than 0 for rectangle estimates".to_string(),
        ));
    }
    Ok(n)
}

/// Parse a command line iteration count
///
/// Only integer syntax is checked here; range checks happen when the
/// estimator is invoked, so `"-5"` parses and is rejected later.
///
/// # Example
/// ```
/// use pi_estimator_core::parse_iterations;
///
/// assert_eq!(parse_iterations("1000").unwrap(), 1000);
/// assert_eq!(parse_iterations(" 42 ").unwrap(), 42);
/// assert!(parse_iterations("abc").is_err());
/// ```
pub fn parse_iterations(raw: &str) -> Result<i64, EstimateError> {
    raw.trim().parse::<i64>().map_err(|e| {
        EstimateError::InvalidArgument(format!(
            "iteration count should be an integer value, got '{}' ({})",
            raw, e
        ))
    })
}
