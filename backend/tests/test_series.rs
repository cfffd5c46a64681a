//! Tests for the series estimator

use pi_estimator_core::estimator::{series_pi, series_pi_with_progress, PROGRESS_INTERVAL};
use pi_estimator_core::{EstimateError, EstimatorMethod};
use std::f64::consts::PI;

#[test]
fn test_zero_pairs_is_zero() {
    assert_eq!(series_pi(0).unwrap(), 0.0);
}

#[test]
fn test_one_pair() {
    // 4 * (1/1 - 1/3)
    let pi = series_pi(1).unwrap();
    assert!((pi - 8.0 / 3.0).abs() < 1e-15);
}

#[test]
fn test_two_pairs() {
    // 4 * (1 - 1/3 + 1/5 - 1/7)
    let expected = 4.0 * (1.0 - 1.0 / 3.0 + 1.0 / 5.0 - 1.0 / 7.0);
    assert!((series_pi(2).unwrap() - expected).abs() < 1e-14);
}

#[test]
fn test_converges_for_small_n() {
    let mut last_error = f64::MAX;
    for n in [1, 10, 100, 1_000, 10_000, 100_000] {
        let error = (series_pi(n).unwrap() - PI).abs();
        assert!(error < last_error, "error did not shrink at n = {}", n);
        last_error = error;
    }
    assert!(last_error < 1e-5);
}

#[test]
fn test_always_below_pi() {
    // Every pair adds a positive amount, so partial sums approach π from below
    for n in 1..200 {
        assert!(series_pi(n).unwrap() < PI);
    }
}

#[test]
fn test_invalid_counts() {
    assert!(matches!(series_pi(-1), Err(EstimateError::InvalidArgument(_))));
    assert!(matches!(series_pi(i64::MAX), Err(EstimateError::InvalidArgument(_))));
}

#[test]
fn test_progress_cadence() {
    let mut seen = Vec::new();
    let mut observer = |done: u64, total: u64| seen.push((done, total));
    let n = (3 * PROGRESS_INTERVAL) as i64;
    series_pi_with_progress(n, &mut observer).unwrap();

    let total = n as u64;
    assert_eq!(
        seen,
        vec![
            (0, total),
            (PROGRESS_INTERVAL, total),
            (2 * PROGRESS_INTERVAL, total)
        ]
    );
}

#[test]
fn test_progress_does_not_change_result() {
    let mut ignored = |_: u64, _: u64| {};
    assert_eq!(
        series_pi_with_progress(5_000, &mut ignored).unwrap(),
        series_pi(5_000).unwrap()
    );
}

#[test]
fn test_method_dispatch() {
    assert_eq!(
        EstimatorMethod::Series.estimate(250).unwrap(),
        series_pi(250).unwrap()
    );
}
