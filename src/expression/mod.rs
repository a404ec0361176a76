//! Expression parsing, evaluation, and degree inspection.
//!
//! One canonical parsed representation ([`Ast`]) with two independent
//! derivations:
//! ├ a numeric callable  ([`Ast::eval`] / [`Ast::callable`])
//! └ a symbolic degree   ([`Ast::degree`], consumed by the pipeline's
//!                        polynomial degree guard)
//!
//! Internal organisation:
//! ├ token.rs  : tokenisation
//! ├ parser.rs : recursive descent, precedence climbing
//! ├ ast.rs    : the [`Ast`] enum and known function names
//! ├ eval.rs   : tree-walk numeric evaluation
//! └ degree.rs : structural polynomial-degree query

mod degree;
mod eval;
mod parser;
mod token;

pub mod ast;
pub mod errors;

pub use ast::{Ast, Func};
pub use errors::ParseError;
