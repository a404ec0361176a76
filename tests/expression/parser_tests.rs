//! tests for expression parsing
use rill::expression::{Ast, Func, ParseError};

type TestResult = Result<(), ParseError>;

#[test]
fn parses_linear() -> TestResult {
    let ast = Ast::parse("x - 2")?;
    assert_eq!(
        ast,
        Ast::Sub(Box::new(Ast::Var), Box::new(Ast::Num(2.0)))
    );
    Ok(())
}

#[test]
fn power_is_right_associative() -> TestResult {
    // 2^3^2 == 2^(3^2)
    let ast = Ast::parse("2^3^2")?;
    assert_eq!((ast.eval(0.0)).unwrap(), 512.0);
    Ok(())
}

#[test]
fn unary_minus_binds_looser_than_power() -> TestResult {
    // -x^2 at x=3 is -(3^2) = -9
    let ast = Ast::parse("-x^2")?;
    assert_eq!(ast.eval(3.0).unwrap(), -9.0);
    Ok(())
}

#[test]
fn negative_exponent() -> TestResult {
    let ast = Ast::parse("2^-2")?;
    assert_eq!(ast.eval(0.0).unwrap(), 0.25);
    Ok(())
}

#[test]
fn function_call() -> TestResult {
    let ast = Ast::parse("sin(x)")?;
    assert_eq!(ast, Ast::Call(Func::Sin, Box::new(Ast::Var)));
    Ok(())
}

#[test]
fn number_with_exponent_literal() -> TestResult {
    let ast = Ast::parse("1.5e2")?;
    assert_eq!(ast, Ast::Num(150.0));
    Ok(())
}

#[test]
fn rejects_unknown_identifier() -> TestResult {
    let err = Ast::parse("y + 1").unwrap_err();
    assert!(matches!(err, ParseError::UnknownIdentifier { name } if name == "y"));
    Ok(())
}

#[test]
fn rejects_unknown_function() -> TestResult {
    let err = Ast::parse("sinh(x)").unwrap_err();
    assert!(matches!(err, ParseError::UnknownIdentifier { name } if name == "sinh"));
    Ok(())
}

#[test]
fn rejects_trailing_tokens() -> TestResult {
    let err = Ast::parse("x + 1 )").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    Ok(())
}

#[test]
fn rejects_implicit_multiplication() -> TestResult {
    let err = Ast::parse("2 x").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    Ok(())
}

#[test]
fn rejects_empty_input() -> TestResult {
    let err = Ast::parse("").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd));
    Ok(())
}

#[test]
fn rejects_unclosed_paren() -> TestResult {
    let err = Ast::parse("(x + 1").unwrap_err();
    assert!(matches!(err, ParseError::Expected { expected: ")" }));
    Ok(())
}

#[test]
fn rejects_stray_character() -> TestResult {
    let err = Ast::parse("x % 2").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedChar { ch: '%', .. }));
    Ok(())
}
