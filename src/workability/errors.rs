//! Workability rejection reasons.
//!
//! ├ [`WorkabilityError::NonRealOutput`] : sampling hit a non-real result
//! ├ [`WorkabilityError::Discontinuous`] : continuity verdict failed
//! ├ [`WorkabilityError::NoSignChange`]  : endpoints do not strictly bracket
//! └ [`WorkabilityError::Eval`]          : caller-side evaluation failure

use super::continuity::ContinuityVerdict;
use crate::function::EvalError;
use thiserror::Error;

/// Why an interval failed certification.
///
/// Each variant carries enough context (interval, endpoint values, failed
/// verdict) to explain the rejection. These are deterministic structural
/// judgments on fixed input; retrying is never appropriate.
#[derive(Debug, Error)]
pub enum WorkabilityError {
    #[error("non-real output at x={x} ({op}): validation aborted")]
    NonRealOutput { x: f64, op: &'static str },

    #[error("not workable on [{a}, {b}]: continuity check failed")]
    Discontinuous {
        a: f64,
        b: f64,
        verdict: ContinuityVerdict,
    },

    #[error("not workable on [{a}, {b}]: f(a)={fa}, f(b)={fb} do not strictly bracket a sign change")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error(transparent)]
    Eval(#[from] EvalError),
}
