//! Engine run outcome.

/// Why the engine stopped.
///
/// [`Termination::BudgetExhausted`] is a defined non-convergence outcome, not
/// an error: the caller distinguishes it from convergence through
/// [`BisectionReport::root`] being `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Consecutive midpoints agreed on the leading decimal prefix.
    DigitsMatched,
    /// A midpoint evaluated to exactly zero.
    ExactZero,
    /// Iteration cap or theoretical estimate reached without convergence.
    BudgetExhausted,
}

/// Final report of one bisection run.
///
/// ├ `root`        : root estimate; `None` iff the budget was exhausted
/// ├ `f_root`      : function value at `root`
/// ├ `iterations`  : loop turns completed before returning
/// ├ `evals`       : function evaluations performed
/// ├ `termination` : why the engine stopped
/// ├ `rel_error`   : last relative-error estimate
/// └ `left`/`right`: final bracket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionReport {
    pub root: Option<f64>,
    pub f_root: Option<f64>,
    pub iterations: usize,
    pub evals: usize,
    pub termination: Termination,
    pub rel_error: f64,
    pub left: f64,
    pub right: f64,
}

impl BisectionReport {
    /// True unless the iteration budget ran out.
    pub fn converged(&self) -> bool {
        self.root.is_some()
    }
}
