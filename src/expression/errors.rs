//! Expression parse errors.

use thiserror::Error;

/// Errors produced while turning an expression string into an [`crate::Ast`].
///
/// The expression language is single-variable: `x` is the only legal variable
/// name, and any identifier that is neither `x` nor a known function name is
/// rejected here rather than at evaluation time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character `{ch}` at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number literal `{lit}` at byte {pos}")]
    MalformedNumber { lit: String, pos: usize },

    #[error("unexpected token `{found}`")]
    UnexpectedToken { found: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown identifier `{name}`: only `x` and function names are allowed")]
    UnknownIdentifier { name: String },

    #[error("expected `{expected}`")]
    Expected { expected: &'static str },
}
