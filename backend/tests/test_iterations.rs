//! Tests for iteration count validation and parsing

use pi_estimator_core::{parse_iterations, validate_iterations, EstimateError, MAX_ITERATIONS};

#[test]
fn test_accepts_full_range() {
    assert_eq!(validate_iterations(0).unwrap(), 0);
    assert_eq!(validate_iterations(1).unwrap(), 1);
    assert_eq!(validate_iterations(MAX_ITERATIONS).unwrap(), (i64::MAX - 1) as u64);
}

#[test]
fn test_rejects_negative() {
    assert!(matches!(
        validate_iterations(-1),
        Err(EstimateError::InvalidArgument(_))
    ));
    assert!(validate_iterations(i64::MIN).is_err());
}

#[test]
fn test_rejects_max_value() {
    assert!(matches!(
        validate_iterations(i64::MAX),
        Err(EstimateError::InvalidArgument(_))
    ));
}

#[test]
fn test_parse_integer() {
    assert_eq!(parse_iterations("1000").unwrap(), 1000);
    assert_eq!(parse_iterations("0").unwrap(), 0);
}

#[test]
fn test_parse_negative_is_syntax_only() {
    // Parses fine; the estimator rejects it later
    assert_eq!(parse_iterations("-5").unwrap(), -5);
}

#[test]
fn test_parse_rejects_non_integers() {
    for raw in ["abc", "", "1.5", "1e9", "1_000", "99999999999999999999"] {
        let err = parse_iterations(raw).unwrap_err();
        assert!(
            err.to_string().starts_with("Invalid argument:"),
            "unexpected message for {:?}: {}",
            raw,
            err
        );
    }
}
