//! Root-existence certification.

use super::continuity::ContinuityVerdict;
use super::errors::WorkabilityError;
use super::sampler::SampleSet;
use crate::function::EvalError;

/// Proof token that an interval passed certification: numerically continuous
/// and strictly bracketing one sign change.
///
/// Carries the endpoint values so the bisection engine can narrow the bracket
/// sign-aware: the orientation (`f(a) < 0` or `f(a) > 0`) is fixed here, once,
/// rather than assumed inside the loop.
#[derive(Debug, Clone, Copy)]
pub struct WorkableInterval {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
}

impl WorkableInterval {
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn fa(&self) -> f64 {
        self.fa
    }

    pub fn fb(&self) -> f64 {
        self.fb
    }
}

/// Certifies `[a, b]` as workable for `f`.
///
/// 1. Samples `f` at `samples` points and forms the continuity verdict; a
///    failed verdict rejects the interval.
/// 2. Evaluates the endpoints and applies the intermediate-value test. Only a
///    strictly negative product `f(a)*f(b) < 0` certifies: a zero product (an
///    endpoint is itself a root) is documented boundary policy and does NOT
///    count as workable.
///
/// No ordering invariant is imposed on `a` relative to `b`.
pub fn certify<F>(
    f: &mut F,
    a: f64,
    b: f64,
    samples: usize,
) -> Result<WorkableInterval, WorkabilityError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    let set = SampleSet::collect(f, a, b, samples)?;
    let verdict = ContinuityVerdict::from_samples(&set);
    if !verdict.passed() {
        return Err(WorkabilityError::Discontinuous { a, b, verdict });
    }

    let fa = f(a)?;
    let fb = f(b)?;
    tracing::debug!(a, b, fa, fb, "endpoint values");

    // `!(.. < ..)` also rejects a NaN product
    if !(fa * fb < 0.0) {
        return Err(WorkabilityError::NoSignChange { a, b, fa, fb });
    }

    Ok(WorkableInterval { a, b, fa, fb })
}
