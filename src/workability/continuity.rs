//! Numeric continuity verdict.
//!
//! A heuristic proxy for mathematical continuity: it cannot catch a jump
//! between two samples, but cheaply rejects poles and singularities that land
//! on (or blow up near) a sample point.

use super::sampler::{SampleSet, ZERO_ATOL};

/// Outcome of the continuity check over one [`SampleSet`].
#[derive(Debug, Clone)]
pub struct ContinuityVerdict {
    /// Every sampled output was a finite real number.
    pub finite_ok: bool,
    /// No sampled output was within [`ZERO_ATOL`] of zero.
    pub nonzero_ok: bool,
    non_finite_at: Vec<f64>,
}

impl ContinuityVerdict {
    pub(crate) fn from_samples(samples: &SampleSet) -> ContinuityVerdict {
        let non_finite_at = samples.non_finite_points();
        let finite_ok = non_finite_at.is_empty();
        let nonzero_ok = !samples.any_near_zero(ZERO_ATOL);

        if !finite_ok {
            tracing::debug!(points = ?non_finite_at, "non-finite sampled outputs");
        }
        tracing::debug!(finite_ok, nonzero_ok, "continuity verdict");

        ContinuityVerdict { finite_ok, nonzero_ok, non_finite_at }
    }

    /// The combined pass/fail continuity result.
    pub fn passed(&self) -> bool {
        self.finite_ok && self.nonzero_ok
    }

    /// Sample points that produced non-finite outputs. Diagnostic only.
    pub fn non_finite_at(&self) -> &[f64] {
        &self.non_finite_at
    }
}
