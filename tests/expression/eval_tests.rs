//! tests for numeric evaluation of parsed expressions
use approx::assert_relative_eq;
use rill::expression::{Ast, ParseError};
use rill::function::EvalError;

type TestResult = Result<(), ParseError>;

#[test]
fn evaluates_polynomial() -> TestResult {
    let ast = Ast::parse("x^2 - 4")?;
    assert_eq!(ast.eval(3.0).unwrap(), 5.0);
    assert_eq!(ast.eval(-2.0).unwrap(), 0.0);
    Ok(())
}

#[test]
fn evaluates_trig() -> TestResult {
    let ast = Ast::parse("sin(x) + cos(x)")?;
    let x = 0.7;
    assert_relative_eq!(ast.eval(x).unwrap(), x.sin() + x.cos(), max_relative = 1e-15);
    Ok(())
}

#[test]
fn division_by_zero_is_ieee_infinity() -> TestResult {
    // poles surface as non-finite samples, not evaluation errors
    let ast = Ast::parse("1/x")?;
    assert!(ast.eval(0.0).unwrap().is_infinite());
    Ok(())
}

#[test]
fn ln_of_zero_is_negative_infinity() -> TestResult {
    let ast = Ast::parse("ln(x)")?;
    assert_eq!(ast.eval(0.0).unwrap(), f64::NEG_INFINITY);
    Ok(())
}

#[test]
fn sqrt_of_negative_is_non_real() -> TestResult {
    let ast = Ast::parse("sqrt(x)")?;
    let err = ast.eval(-1.0).unwrap_err();
    assert!(matches!(err, EvalError::NonReal { x, op: "sqrt" } if x == -1.0));
    Ok(())
}

#[test]
fn ln_of_negative_is_non_real() -> TestResult {
    let ast = Ast::parse("ln(x - 1)")?;
    let err = ast.eval(0.0).unwrap_err();
    assert!(matches!(err, EvalError::NonReal { op: "ln", .. }));
    Ok(())
}

#[test]
fn fractional_power_of_negative_is_non_real() -> TestResult {
    let ast = Ast::parse("x^0.5")?;
    let err = ast.eval(-4.0).unwrap_err();
    assert!(matches!(err, EvalError::NonReal { op: "fractional power", .. }));
    Ok(())
}

#[test]
fn integer_power_of_negative_is_real() -> TestResult {
    let ast = Ast::parse("x^3")?;
    assert_eq!(ast.eval(-2.0).unwrap(), -8.0);
    Ok(())
}

#[test]
fn callable_matches_eval() -> TestResult {
    let ast = Ast::parse("exp(x) - 2")?;
    let mut f = ast.callable();
    assert_eq!(f(1.0).unwrap(), ast.eval(1.0).unwrap());
    Ok(())
}
