//! Core building blocks shared by every estimator
//!
//! - **iterations**: iteration-count validation, parsing and the error type
//! - **elapsed**: wall-clock timing with adaptive unit selection

pub mod elapsed;
pub mod iterations;

pub use elapsed::{ElapsedTime, TimeUnit};
pub use iterations::{
    parse_iterations, validate_iterations, EstimateError, MAX_ITERATIONS,
};
