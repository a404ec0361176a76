//! The bisection loop.

use super::config::{BisectionCfg, ConfigError};
use super::digits::digits_match;
use super::errors::BisectionError;
use super::report::{BisectionReport, Termination};
use crate::function::EvalError;
use crate::workability::WorkableInterval;

/// Theoretical iteration estimate for reaching `d` matching decimal digits
/// from an interval of this width.
///
/// `ceil(ln(w) - ln(0.5*10^-d)/ln(2) - 1)`. The historical operator grouping
/// (the second log is divided by `ln 2`, the first is not) is preserved
/// exactly. Clamped to zero for degenerate widths.
fn theoretical_iterations(a: f64, b: f64, digits: u32) -> usize {
    let width = (b - a).abs();
    let half_ulp = 0.5 * 10f64.powi(-(digits as i32));
    let raw = (width.ln() - half_ulp.ln() / 2f64.ln() - 1.0).ceil();
    if raw.is_finite() && raw > 0.0 {
        raw as usize
    } else {
        0
    }
}

/// Bisects a certified-workable interval until `digits` leading decimal
/// characters of consecutive midpoints agree.
///
/// # Arguments
///
/// ┌ `f`        - The function whose root is to be found. Must be the same
/// │              function the interval was certified against.
/// ├ `interval` - Certification token from [`crate::certify`].
/// ├ `digits`   - Target count of matching leading decimal characters (>= 1).
/// └ `cfg`      - Iteration cap (default 100). See [`BisectionCfg`].
///
/// # Behavior
///
/// Loops at most `min(max_iter, theoretical_estimate)` turns. Each turn:
/// ├ midpoint `c = (a+b)/2`, `fc = f(c)`
/// ├ relative error `|c-a|/|c|` if `fc*fa >= 0`, else `|c-b|/|c|` (a proxy for
/// │   which sub-interval narrowed)
/// ├ convergence: once a previous midpoint exists, or the relative error is
/// │   at or below `0.5*10^-digits`, the decimal prefixes of the current and
/// │   previous midpoint are compared; a match returns `c`. The disjunction is
/// │   historical behavior, preserved as-is: after the first turn the digit
/// │   comparison fires every iteration regardless of the error threshold.
/// ├ `fc == 0` exactly returns `c` immediately as an exact root
/// └ bracket update: the midpoint replaces whichever endpoint `fc` shares a
///     sign with, using the orientation recorded at certification time, so a
///     decreasing bracket (`f(a) > 0 > f(b)`) narrows correctly too.
///
/// # Returns
///
/// A [`BisectionReport`]. `root` is `Some` on [`Termination::DigitsMatched`]
/// or [`Termination::ExactZero`]; a run that exhausts the budget returns
/// [`Termination::BudgetExhausted`] with `root: None`: an outcome, not an
/// error.
///
/// # Errors
///
/// ┌ [`ConfigError::InvalidDigits`] / invalid `cfg` via [`BisectionError::Config`]
/// └ [`BisectionError::Eval`] - the function failed during iteration;
///     propagated uncaught.
pub fn bisect<F>(
    mut f: F,
    interval: WorkableInterval,
    digits: u32,
    cfg: BisectionCfg,
) -> Result<BisectionReport, BisectionError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    if digits == 0 {
        return Err(ConfigError::InvalidDigits { got: digits }.into());
    }
    let cfg = cfg.validate()?;

    let mut a = interval.a();
    let mut b = interval.b();
    let mut fa = interval.fa();
    let negative_at_a = fa < 0.0;

    let half_ulp = 0.5 * 10f64.powi(-(digits as i32));
    let estimate = theoretical_iterations(a, b, digits);
    let budget = cfg.max_iter().min(estimate);
    tracing::debug!(estimate, budget, "iteration estimate");

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, EvalError> {
        evals += 1;
        f(x)
    };

    let mut prev_c: Option<f64> = None;
    let mut iterations = 0;
    let mut rel_error = f64::INFINITY;

    while iterations < budget {
        let c = a + (b - a) * 0.5;
        let fc = eval(c)?;

        rel_error = if fc * fa >= 0.0 {
            ((c - a) / c).abs()
        } else {
            ((c - b) / c).abs()
        };

        if (iterations > 0 && prev_c.is_some()) || rel_error <= half_ulp {
            if let Some(prev) = prev_c {
                if digits_match(c, prev, digits) {
                    tracing::debug!(c, iterations, digits, "converged by digit match");
                    return Ok(BisectionReport {
                        root: Some(c),
                        f_root: Some(fc),
                        iterations,
                        evals,
                        termination: Termination::DigitsMatched,
                        rel_error,
                        left: a,
                        right: b,
                    });
                }
            }
        }

        if fc == 0.0 {
            tracing::debug!(c, iterations, "exact root");
            return Ok(BisectionReport {
                root: Some(c),
                f_root: Some(fc),
                iterations,
                evals,
                termination: Termination::ExactZero,
                rel_error,
                left: a,
                right: b,
            });
        }

        // midpoint replaces the endpoint whose side fc falls on
        if (fc < 0.0) == negative_at_a {
            a = c;
            fa = fc;
        } else {
            b = c;
        }

        prev_c = Some(c);
        iterations += 1;
        tracing::trace!(iterations, a, b, c, fc, rel_error, "bisection step");
    }

    tracing::debug!(iterations, "iteration budget exhausted without convergence");
    Ok(BisectionReport {
        root: None,
        f_root: None,
        iterations,
        evals,
        termination: Termination::BudgetExhausted,
        rel_error,
        left: a,
        right: b,
    })
}
