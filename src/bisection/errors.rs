//! Engine error type.

use crate::bisection::config::ConfigError;
use crate::function::EvalError;
use crate::workability::WorkabilityError;
use thiserror::Error;

/// Errors surfaced by [`crate::bisect`].
///
/// Budget exhaustion is *not* here: it is a defined outcome reported through
/// [`crate::BisectionReport`] with `root: None`.
#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Workability(#[from] WorkabilityError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
