//! End-to-end solve: validation pipeline plus the degree guard.
//!
//! Data flows one way: sampler → continuity → root-existence → (degree guard)
//! → bisection engine. Each stage hands off a pass verdict or aborts with a
//! typed failure. All configuration travels in an explicit [`BisectionCfg`];
//! there is no process-wide state, so two runs on identical input produce
//! identical output.

use crate::bisection::{bisect, BisectionCfg, BisectionError, BisectionReport, ConfigError};
use crate::expression::{Ast, ParseError};
use crate::function::EvalError;
use crate::workability::{certify, WorkabilityError};
use thiserror::Error;

/// Maximum polynomial degree accepted by the degree guard.
///
/// Above this, more than one root may hide in the interval; the guard is a
/// narrow structural heuristic, bypassed entirely for non-polynomials.
pub const MAX_POLY_DEGREE: u32 = 2;

/// Any failure of the full solve pipeline.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("possible multiple roots: polynomial degree {degree} exceeds 2")]
    DegreeExceeded { degree: u32 },

    #[error(transparent)]
    Workability(#[from] WorkabilityError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<BisectionError> for SolveError {
    fn from(e: BisectionError) -> SolveError {
        match e {
            BisectionError::Workability(e) => SolveError::Workability(e),
            BisectionError::Config(e) => SolveError::Config(e),
            BisectionError::Eval(e) => SolveError::Eval(e),
        }
    }
}

/// Solves for a root of the expression `expr` (in terms of `x`) on `[a, b]`.
///
/// Parses once into a canonical [`Ast`], certifies the interval as workable,
/// applies the polynomial degree guard to the symbolic form, and runs the
/// digit-matching bisection engine on the numeric derivation.
///
/// The guard runs after certification, matching the historical stage order, preserved.
pub fn solve_str(
    expr: &str,
    a: f64,
    b: f64,
    digits: u32,
    cfg: BisectionCfg,
) -> Result<BisectionReport, SolveError> {
    let ast = Ast::parse(expr)?;
    let cfg = cfg.validate()?;

    let mut callable = ast.callable();
    let interval = certify(&mut callable, a, b, cfg.samples())?;

    if let Some(degree) = ast.degree() {
        if degree > MAX_POLY_DEGREE {
            return Err(SolveError::DegreeExceeded { degree });
        }
    }

    bisect(callable, interval, digits, cfg).map_err(SolveError::from)
}

/// Solves for a root of an opaque callable on `[a, b]`.
///
/// Same pipeline as [`solve_str`], minus the degree guard: with no symbolic
/// form there is nothing for the guard to inspect.
pub fn solve_fn<F>(
    mut f: F,
    a: f64,
    b: f64,
    digits: u32,
    cfg: BisectionCfg,
) -> Result<BisectionReport, SolveError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    let cfg = cfg.validate()?;
    let interval = certify(&mut f, a, b, cfg.samples())?;
    bisect(f, interval, digits, cfg).map_err(SolveError::from)
}
