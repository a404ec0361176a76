//! The parsed expression representation.

use super::errors::ParseError;
use super::parser::Parser;
use crate::function::EvalError;

/// Known unary function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    pub(crate) fn from_name(name: &str) -> Option<Func> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "exp" => Some(Func::Exp),
            "ln" => Some(Func::Ln),
            "sqrt" => Some(Func::Sqrt),
            "abs" => Some(Func::Abs),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }
}

/// A single-variable expression in `x`.
///
/// Parsed once, then derived two ways:
/// ├ [`Ast::eval`]   : numeric value at a point (the callable contract)
/// └ [`Ast::degree`] : structural polynomial degree, if the expression is a
///                     polynomial in `x`
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Num(f64),
    Var,
    Neg(Box<Ast>),
    Add(Box<Ast>, Box<Ast>),
    Sub(Box<Ast>, Box<Ast>),
    Mul(Box<Ast>, Box<Ast>),
    Div(Box<Ast>, Box<Ast>),
    Pow(Box<Ast>, Box<Ast>),
    Call(Func, Box<Ast>),
}

impl Ast {
    /// Parses an expression string in terms of `x`.
    pub fn parse(src: &str) -> Result<Ast, ParseError> {
        Parser::parse(src)
    }

    /// Borrows the expression as a callable satisfying the contract in
    /// [`crate::function`].
    pub fn callable(&self) -> impl FnMut(f64) -> Result<f64, EvalError> + '_ {
        move |x| self.eval(x)
    }
}
