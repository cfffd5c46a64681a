//! π Estimator Core
//!
//! Numerical approximations of π by two elementary methods plus a search for
//! the iteration count where floating-point error stops improving.
//!
//! # Architecture
//!
//! - **core**: Iteration-count validation, errors, elapsed-time formatting
//! - **estimator**: Series and rectangle (Riemann sum) estimators
//! - **driver**: Resolve the iteration count, run and time an estimator
//! - **optimizer**: Coarse-to-fine search over the iteration count
//!
//! # Critical Invariants
//!
//! 1. Every public numeric entry point validates `0 <= n <= i64::MAX - 1`
//! 2. Estimator loops never print; progress goes through an observer
//! 3. Single-threaded, no shared state

// Module declarations
pub mod core;
pub mod driver;
pub mod estimator;
pub mod optimizer;

// Re-exports for convenience
pub use crate::core::{
    parse_iterations, validate_iterations, ElapsedTime, EstimateError, TimeUnit, MAX_ITERATIONS,
};
pub use driver::{
    resolve_iterations, run_estimate, run_rectangle, DriverConfig, EstimateReport,
    RectangleReport, DEFAULT_ITERATIONS,
};
pub use estimator::{
    EstimatorMethod, NoProgress, ProgressObserver, RectangleEstimate, PROGRESS_INTERVAL,
};
pub use optimizer::{
    find_optimum, find_optimum_n, NoSearchObserver, RiemannVariant, SearchConfig,
    SearchObserver, SearchOutcome, SearchRound, SearchState,
};
