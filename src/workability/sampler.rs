//! Dense sampling of a function over an interval.

use super::errors::WorkabilityError;
use crate::function::EvalError;

/// Absolute tolerance below which a sampled output counts as "at zero".
pub const ZERO_ATOL: f64 = 1e-10;

/// Evaluation points over `[a, b]` paired with their function outputs.
///
/// Ephemeral: built for one continuity verdict, then discarded.
#[derive(Debug, Clone)]
pub struct SampleSet {
    points: Vec<f64>,
    outputs: Vec<f64>,
}

impl SampleSet {
    /// Evaluates `f` at `n` evenly spaced points from `a` to `b` inclusive.
    ///
    /// # Errors
    /// ├ [`WorkabilityError::NonRealOutput`] : `f` reported a non-real result.
    /// │   Hard abort; no continuity verdict can be formed past this point.
    /// └ [`WorkabilityError::Eval`] : any other evaluation failure, propagated
    ///     unchanged.
    pub fn collect<F>(f: &mut F, a: f64, b: f64, n: usize) -> Result<SampleSet, WorkabilityError>
    where
        F: FnMut(f64) -> Result<f64, EvalError>,
    {
        debug_assert!(n >= 2);
        let step = (b - a) / (n - 1) as f64;

        let mut points = Vec::with_capacity(n);
        let mut outputs = Vec::with_capacity(n);
        for k in 0..n {
            // land exactly on b regardless of rounding in the step
            let x = if k == n - 1 { b } else { a + step * k as f64 };
            let y = match f(x) {
                Ok(y) => y,
                Err(EvalError::NonReal { x, op }) => {
                    return Err(WorkabilityError::NonRealOutput { x, op })
                }
                Err(e) => return Err(WorkabilityError::Eval(e)),
            };
            points.push(x);
            outputs.push(y);
        }

        Ok(SampleSet { points, outputs })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Sample points whose outputs are NaN or infinite.
    pub fn non_finite_points(&self) -> Vec<f64> {
        self.points
            .iter()
            .zip(&self.outputs)
            .filter(|(_, y)| !y.is_finite())
            .map(|(x, _)| *x)
            .collect()
    }

    /// True if any output lies within `atol` of zero.
    pub fn any_near_zero(&self, atol: f64) -> bool {
        self.outputs.iter().any(|y| y.abs() <= atol)
    }
}
