//! tests for the end-to-end solve pipeline
use rill::bisection::{BisectionCfg, Termination};
use rill::function::total;
use rill::pipeline::{solve_fn, solve_str, SolveError};
use rill::workability::WorkabilityError;
use rill::ParseError;

type TestResult = Result<(), SolveError>;

#[test]
fn solves_linear_expression() -> TestResult {
    let res = solve_str("x - 2", 0.0, 10.0, 4, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::DigitsMatched);
    assert_eq!(res.root, Some(1.99951171875));
    Ok(())
}

#[test]
fn quadratic_passes_the_degree_guard() -> TestResult {
    // same bracket shape as the linear case: identical midpoint sequence
    let quadratic = solve_str("x^2 - 4", 0.0, 10.0, 4, BisectionCfg::new())?;
    let linear = solve_str("x - 2", 0.0, 10.0, 4, BisectionCfg::new())?;

    assert_eq!(quadratic.root, linear.root);
    assert_eq!(quadratic.iterations, linear.iterations);
    Ok(())
}

#[test]
fn cubic_trips_the_degree_guard() -> TestResult {
    // [-2, 2] brackets a sign change, so certification passes and the
    // guard is what rejects
    let err = solve_str("x^3 - x", -2.0, 2.0, 4, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, SolveError::DegreeExceeded { degree: 3 }));
    Ok(())
}

#[test]
fn degree_guard_is_bypassed_for_non_polynomials() -> TestResult {
    let res = solve_str("sin(x)", 3.0, 4.0, 5, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::DigitsMatched);
    assert_eq!(res.root, Some(3.14111328125));
    assert!((res.root.unwrap() - std::f64::consts::PI).abs() < 1e-2);
    Ok(())
}

#[test]
fn solves_exponential_expression() -> TestResult {
    let res = solve_str("exp(x) - 2", 0.0, 2.0, 4, BisectionCfg::new())?;

    assert_eq!(res.root, Some(0.69140625));
    assert!((res.root.unwrap() - std::f64::consts::LN_2).abs() < 1e-2);
    Ok(())
}

#[test]
fn pole_on_the_sample_grid_is_not_workable() -> TestResult {
    let err = solve_str("1/x", -1.0, 1.0, 4, BisectionCfg::new().with_samples(1001)).unwrap_err();

    assert!(matches!(
        err,
        SolveError::Workability(WorkabilityError::Discontinuous { .. })
    ));
    Ok(())
}

#[test]
fn non_real_sampling_aborts() -> TestResult {
    // sqrt of a negative argument during validation
    let err = solve_str("sqrt(x) - 2", -1.0, 5.0, 4, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SolveError::Workability(WorkabilityError::NonRealOutput { x: -1.0, .. })
    ));
    Ok(())
}

#[test]
fn same_sign_interval_is_not_workable() -> TestResult {
    let err = solve_str("x^2 - 4", 3.0, 10.0, 4, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SolveError::Workability(WorkabilityError::NoSignChange { .. })
    ));
    Ok(())
}

#[test]
fn parse_errors_surface_first() -> TestResult {
    let err = solve_str("2x + 1", 0.0, 1.0, 4, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, SolveError::Parse(ParseError::UnexpectedToken { .. })));
    Ok(())
}

#[test]
fn opaque_callables_skip_the_degree_guard() -> TestResult {
    // degree 3, but there is no symbolic form to inspect
    let res = solve_fn(total(|x| (x - 2.0).powi(3)), 0.0, 10.0, 4, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::DigitsMatched);
    assert!((res.root.unwrap() - 2.0).abs() < 1e-2);
    Ok(())
}

#[test]
fn pipeline_is_idempotent() -> TestResult {
    let first = solve_str("x - 2", 0.0, 10.0, 4, BisectionCfg::new())?;
    let second = solve_str("x - 2", 0.0, 10.0, 4, BisectionCfg::new())?;

    assert_eq!(first, second);
    Ok(())
}
