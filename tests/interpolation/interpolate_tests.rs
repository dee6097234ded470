use num_rational::BigRational;
use polyvander::interpolation::config::VandermondeCfg;
use polyvander::interpolation::errors::InterpolationError;
use polyvander::interpolation::vandermonde::interpolate;

use super::common::{ints, r, TestResult};

#[test]
fn quadratic_global_match() -> TestResult {
    let x      = ints(&[0, 1, 2]);
    let y      = ints(&[0, 1, 4]);
    let x_eval = vec![r(1, 2), r(3, 2)];

    let cfg = VandermondeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "vandermonde");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_eq!(rep.coefficients, ints(&[0, 0, 1]));
    assert_eq!(rep.evaluated, vec![r(1, 4), r(9, 4)]);
    Ok(())
}

#[test]
fn exact_hits() -> TestResult {
    let x = vec![r(-7, 3), r(0, 1), r(1, 8), r(5, 2), r(6, 1)];
    let y = vec![r(2, 1), r(-1, 9), r(4, 5), r(0, 1), r(13, 3)];

    let cfg = VandermondeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.evaluated, y);
    Ok(())
}

#[test]
fn extrapolation_allowed() -> TestResult {
    // y = 2x + 1
    let x      = ints(&[0, 1]);
    let y      = ints(&[1, 3]);
    let x_eval = ints(&[-10, 50]);

    let cfg = VandermondeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.evaluated, ints(&[-19, 101]));
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> TestResult {
    let x = ints(&[0, 1]);
    let y = ints(&[0, 1]);

    let cfg = VandermondeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    assert_eq!(rep.coefficients, ints(&[0, 1]));
    Ok(())
}

#[test]
fn single_point() -> TestResult {
    let x = ints(&[0]);
    let y = ints(&[4]);
    let x_eval = ints(&[-3, 8]);

    let cfg = VandermondeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.evaluated, ints(&[4, 4]));
    Ok(())
}

#[test]
fn unequal_length_error() {
    let x = ints(&[0, 1, 2]);
    let y = ints(&[0, 1]);
    let cfg = VandermondeCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert_eq!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 });
}

#[test]
fn unequal_length_error_y_first() {
    let x = ints(&[0, 1, 2]);
    let y = ints(&[0, 1]);
    let cfg = VandermondeCfg::new().set_y(&y).unwrap();
    let err = cfg.set_x(&x).unwrap_err();
    assert_eq!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 });
}

#[test]
fn empty_x_error() {
    let err = VandermondeCfg::<BigRational>::new().set_x(&[]).unwrap_err();
    assert_eq!(err, InterpolationError::EmptyInput);
}

#[test]
fn missing_y_fails_validation() {
    let x = ints(&[0, 1]);
    let cfg = VandermondeCfg::new().set_x(&x).unwrap();
    assert_eq!(interpolate(cfg).unwrap_err(), InterpolationError::EmptyInput);
}

#[test]
fn duplicate_x_error() {
    let x = ints(&[3, 1, 3]);
    let err = VandermondeCfg::new().set_x(&x).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateX { first: 0, second: 2 });
}

#[test]
fn duplicate_x_reaches_solver_when_unchecked() {
    let x = ints(&[2, 2]);
    let y = ints(&[1, 5]);

    let cfg = VandermondeCfg::new()
        .set_check_distinct(false)
        .set_x(&x).unwrap()
        .set_y(&y).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::SingularMatrix { .. }));
}

#[test]
fn validate_honours_late_distinct_flag() {
    let x = ints(&[2, 2]);
    let y = ints(&[1, 5]);

    let cfg = VandermondeCfg::new()
        .set_check_distinct(false)
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_check_distinct(true);

    let err = interpolate(cfg).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateX { first: 0, second: 1 });
}

#[test]
fn float_samples() -> TestResult {
    let x      = [0.0, 1.0, 2.0, 3.0];
    let y      = [0.0, 1.0, 8.0, 27.0];
    let x_eval = [0.5, 1.5];

    let cfg = VandermondeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    approx::assert_relative_eq!(rep.evaluated[0], 0.125, epsilon = 1e-12);
    approx::assert_relative_eq!(rep.evaluated[1], 3.375, epsilon = 1e-12);
    Ok(())
}
