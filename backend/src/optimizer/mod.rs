//! Optimizer - search for the iteration count with the smallest error
//!
//! Very large rectangle counts get *less* accurate again: the running sum
//! picks up floating-point rounding error faster than the Riemann error
//! shrinks. This module walks the iteration axis to find where that happens.
//!
//! See `search.rs` for the algorithm.

pub mod search;

pub use search::{
    find_optimum, find_optimum_n, NoSearchObserver, RiemannVariant, SearchConfig,
    SearchObserver, SearchOutcome, SearchRound, SearchState, DEFAULT_START_N,
    DEFAULT_START_STEP,
};
