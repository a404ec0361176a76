//! Tree-walk numeric evaluation.
//!
//! Arithmetic follows IEEE semantics: a pole (`1/0`, `ln(0)`) produces an
//! infinity or NaN and is left for the continuity validator to reject as a
//! non-finite sample. [`EvalError::NonReal`] is reserved for the cases where a
//! real-valued evaluation would need a complex result: even roots and
//! logarithms of negative arguments, and negative bases raised to fractional
//! powers.

use super::ast::{Ast, Func};
use crate::function::EvalError;

impl Ast {
    /// Evaluates the expression at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Ast::Num(v) => Ok(*v),
            Ast::Var => Ok(x),
            Ast::Neg(inner) => Ok(-inner.eval(x)?),
            Ast::Add(lhs, rhs) => Ok(lhs.eval(x)? + rhs.eval(x)?),
            Ast::Sub(lhs, rhs) => Ok(lhs.eval(x)? - rhs.eval(x)?),
            Ast::Mul(lhs, rhs) => Ok(lhs.eval(x)? * rhs.eval(x)?),
            Ast::Div(lhs, rhs) => Ok(lhs.eval(x)? / rhs.eval(x)?),
            Ast::Pow(base, exponent) => {
                let b = base.eval(x)?;
                let e = exponent.eval(x)?;
                if b < 0.0 && e.fract() != 0.0 {
                    return Err(EvalError::NonReal { x, op: "fractional power" });
                }
                Ok(b.powf(e))
            }
            Ast::Call(func, arg) => {
                let v = arg.eval(x)?;
                match func {
                    Func::Sin => Ok(v.sin()),
                    Func::Cos => Ok(v.cos()),
                    Func::Tan => Ok(v.tan()),
                    Func::Exp => Ok(v.exp()),
                    Func::Abs => Ok(v.abs()),
                    Func::Sqrt => {
                        if v < 0.0 {
                            return Err(EvalError::NonReal { x, op: "sqrt" });
                        }
                        Ok(v.sqrt())
                    }
                    Func::Ln => {
                        if v < 0.0 {
                            return Err(EvalError::NonReal { x, op: "ln" });
                        }
                        // ln(0) = -inf, caught by the continuity check
                        Ok(v.ln())
                    }
                }
            }
        }
    }
}
