//! Callable contract shared by every stage of the pipeline.
//!
//! The core is generic over `F: FnMut(f64) -> Result<f64, EvalError>`: a
//! real-to-real function that may legitimately fail for some inputs (a domain
//! error, not a bug). The expression evaluator produces callables of this shape;
//! plain closures are lifted with [`total`].

use thiserror::Error;

/// Evaluation failures a callable may report.
///
/// ├ [`EvalError::NonReal`]        : the real-valued computation would need a
/// │                                 complex result (even root or logarithm of a
/// │                                 negative argument). Aborts validation before
/// │                                 any verdict is formed.
/// └ [`EvalError::DivisionByZero`] : domain error raised by a caller-supplied
///                                   callable. Propagates uncaught.
///
/// Plain IEEE overflow (`1/x` near a pole, `ln(0)`) is *not* an error here: it
/// surfaces as a non-finite sample and fails the continuity verdict instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("non-real result at x={x}: {op} of a negative argument")]
    NonReal { x: f64, op: &'static str },

    #[error("division by zero at x={x}")]
    DivisionByZero { x: f64 },
}

/// Lifts an infallible closure into the callable contract.
#[inline]
pub fn total<F>(mut f: F) -> impl FnMut(f64) -> Result<f64, EvalError>
where
    F: FnMut(f64) -> f64,
{
    move |x| Ok(f(x))
}
