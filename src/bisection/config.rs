//! Bisection configuration.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid max_iter: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid samples: need at least 2 sample points. got {got}")]
    InvalidSamples { got: usize },

    #[error("invalid digits: must be >= 1. got {got}")]
    InvalidDigits { got: u32 },
}

/// Bisection configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_MAX_ITER - Hard iteration cap (the sole runtime bound)
/// └ DEFAULT_SAMPLES  - Sample-grid size for the continuity check
///
/// # Notes:
/// └ The effective loop bound is `min(max_iter, theoretical_estimate)` where
///   the estimate is derived from the interval width and target digit count.
///
/// # Validation:
/// └ Performed in [`crate::bisect`] via [`BisectionCfg::validate()`]:
///    ├ `max_iter` >= 1
///    └ `samples`  >= 2
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    max_iter: Option<usize>,
    samples: Option<usize>,
}

impl BisectionCfg {
    pub const DEFAULT_MAX_ITER: usize = 100;
    pub const DEFAULT_SAMPLES: usize = 1000;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iter(mut self, v: usize) -> Self {
        self.max_iter = Some(v);
        self
    }

    pub fn with_samples(mut self, v: usize) -> Self {
        self.samples = Some(v);
        self
    }

    #[inline]
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter.unwrap_or(Self::DEFAULT_MAX_ITER)
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples.unwrap_or(Self::DEFAULT_SAMPLES)
    }

    pub fn validate(&self) -> Result<BisectionCfg, ConfigError> {
        let max_iter = self.max_iter();
        if max_iter == 0 {
            return Err(ConfigError::InvalidMaxIter { got: max_iter });
        }
        let samples = self.samples();
        if samples < 2 {
            return Err(ConfigError::InvalidSamples { got: samples });
        }
        Ok(Self {
            max_iter: Some(max_iter),
            samples: Some(samples),
        })
    }
}

impl Default for BisectionCfg {
    fn default() -> Self {
        Self {
            max_iter: Some(Self::DEFAULT_MAX_ITER),
            samples: Some(Self::DEFAULT_SAMPLES),
        }
    }
}
