//! # rill
//!
//! Certifies that a single-variable real function is *workable* on a closed
//! interval (numerically continuous, strictly bracketing one sign change) and
//! then locates the enclosed root by interval bisection with a decimal
//! digit-matching convergence rule.
//!
//! Pipeline, leaf-first:
//! ├ [`workability::SampleSet`]        : dense evaluation grid over the interval
//! ├ [`workability::ContinuityVerdict`]: finite-everywhere + no near-zero samples
//! ├ [`workability::certify`]          : intermediate-value sign-change test
//! ├ [`pipeline::solve_str`]           : polynomial degree guard (expressions only)
//! └ [`bisection::bisect`]             : digit-matching bisection engine
//!
//! Functions enter the core either as parsed [`expression::Ast`]s or as plain
//! closures satisfying the callable contract in [`function`].

pub mod bisection;
pub mod expression;
pub mod function;
pub mod pipeline;
pub mod workability;

pub use bisection::{bisect, BisectionCfg, BisectionError, BisectionReport, Termination};
pub use expression::{Ast, Func, ParseError};
pub use function::{total, EvalError};
pub use pipeline::{solve_fn, solve_str, SolveError};
pub use workability::{certify, ContinuityVerdict, SampleSet, WorkabilityError, WorkableInterval};
