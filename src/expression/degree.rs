//! Structural polynomial-degree inspection.

use super::ast::Ast;

impl Ast {
    /// Degree of the expression as a polynomial in `x`, or `None` if the
    /// expression is not structurally a polynomial.
    ///
    /// Structural means no simplification is attempted: `x^3 - x^3` has degree
    /// 3, matching a symbolic `degree()` query on the unsimplified form. The
    /// polynomial fragment is numbers, `x`, `+ - *`, unary minus, `^` with a
    /// non-negative integer literal exponent, and division by a nonzero number
    /// literal. Anything else (`sin`, `sqrt`, `x` in a denominator or exponent,
    /// fractional powers) makes the whole expression non-polynomial.
    pub fn degree(&self) -> Option<u32> {
        match self {
            Ast::Num(_) => Some(0),
            Ast::Var => Some(1),
            Ast::Neg(inner) => inner.degree(),
            Ast::Add(lhs, rhs) | Ast::Sub(lhs, rhs) => {
                Some(lhs.degree()?.max(rhs.degree()?))
            }
            Ast::Mul(lhs, rhs) => Some(lhs.degree()?.saturating_add(rhs.degree()?)),
            Ast::Div(lhs, rhs) => match **rhs {
                Ast::Num(k) if k != 0.0 => lhs.degree(),
                _ => None,
            },
            Ast::Pow(base, exponent) => match **exponent {
                Ast::Num(n) if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => {
                    Some(base.degree()?.saturating_mul(n as u32))
                }
                _ => None,
            },
            Ast::Call(..) => None,
        }
    }
}
