//! Tests for the driver: iteration resolution, timed runs and reports

use pi_estimator_core::estimator::{combined_pi, overestimate_pi, series_pi, underestimate_pi};
use pi_estimator_core::{
    resolve_iterations, run_estimate, run_rectangle, DriverConfig, EstimateError,
    EstimatorMethod, NoProgress, TimeUnit, DEFAULT_ITERATIONS,
};
use std::f64::consts::PI;

#[test]
fn test_default_config() {
    let config = DriverConfig::default();
    assert_eq!(config.default_iterations, 1_000_000_000);
    assert_eq!(DEFAULT_ITERATIONS, 1_000_000_000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_resolve_uses_default_without_argument() {
    let config = DriverConfig::with_default_iterations(5_000);
    assert_eq!(resolve_iterations(None, &config).unwrap(), 5_000);
}

#[test]
fn test_resolve_prefers_argument() {
    let config = DriverConfig::with_default_iterations(5_000);
    assert_eq!(resolve_iterations(Some("1000"), &config).unwrap(), 1_000);
}

#[test]
fn test_resolve_rejects_garbage() {
    let config = DriverConfig::default();
    assert!(matches!(
        resolve_iterations(Some("abc"), &config),
        Err(EstimateError::InvalidArgument(_))
    ));
}

#[test]
fn test_resolve_rejects_invalid_default() {
    let config = DriverConfig::with_default_iterations(-10);
    assert!(config.validate().is_err());
    assert!(resolve_iterations(None, &config).is_err());
}

#[test]
fn test_series_report() {
    let report = run_estimate(EstimatorMethod::Series, 1_000, &mut NoProgress).unwrap();

    assert_eq!(report.method, EstimatorMethod::Series);
    assert_eq!(report.iterations, 1_000);
    assert_eq!(report.estimate, series_pi(1_000).unwrap());
    assert_eq!(report.reference, PI);
    assert_eq!(report.difference, report.estimate - PI);
    assert!(report.difference < 0.0);
    assert_eq!(report.elapsed.unit(), TimeUnit::Seconds);
}

#[test]
fn test_report_rejects_negative() {
    let result = run_estimate(EstimatorMethod::Series, -1, &mut NoProgress);
    assert!(matches!(result, Err(EstimateError::InvalidArgument(_))));
}

#[test]
fn test_rectangle_report() {
    let report = run_rectangle(1_000, &mut NoProgress).unwrap();

    assert_eq!(report.bounds.under, underestimate_pi(1_000).unwrap());
    assert_eq!(report.bounds.over, overestimate_pi(1_000).unwrap());
    assert_eq!(report.combined.estimate, combined_pi(1_000).unwrap());
    assert_eq!(report.combined.method, EstimatorMethod::Combined);

    let under = report.under();
    assert_eq!(under.method, EstimatorMethod::Underestimate);
    assert!(under.difference < 0.0);

    let over = report.over();
    assert_eq!(over.method, EstimatorMethod::Overestimate);
    assert!(over.difference > 0.0);
}

#[test]
fn test_rectangle_report_rejects_zero() {
    assert!(run_rectangle(0, &mut NoProgress).is_err());
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_estimate(EstimatorMethod::Combined, 100, &mut NoProgress).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["method"], "combined");
    assert_eq!(json["iterations"], 100);
    assert_eq!(json["reference"], PI);
    assert!(json["elapsed"]["seconds"].is_number());
}
