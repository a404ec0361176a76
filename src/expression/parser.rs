//! Recursive-descent parser with precedence climbing.
//!
//! Grammar:
//! ├ expr   := term  (('+' | '-') term)*
//! ├ term   := unary (('*' | '/') unary)*
//! ├ unary  := '-' unary | power
//! ├ power  := atom ('^' unary)?        (right-associative)
//! └ atom   := number | 'x' | func '(' expr ')' | '(' expr ')'
//!
//! Unary minus binds looser than `^`, so `-x^2` parses as `-(x^2)` and `2^-3`
//! is legal. Implicit multiplication (`2x`) is not supported.

use super::ast::{Ast, Func};
use super::errors::ParseError;
use super::token::{tokenize, Token};

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(crate) fn parse(src: &str) -> Result<Ast, ParseError> {
        let tokens = tokenize(src)?;
        let mut parser = Parser { tokens, pos: 0 };
        let ast = parser.expr()?;
        match parser.peek() {
            None => Ok(ast),
            Some(t) => Err(ParseError::UnexpectedToken { found: t.to_string() }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn eat(&mut self, want: &Token, expected: &'static str) -> Result<(), ParseError> {
        match self.peek() {
            Some(t) if t == want => {
                self.pos += 1;
                Ok(())
            }
            Some(_) | None => Err(ParseError::Expected { expected }),
        }
    }

    fn expr(&mut self) -> Result<Ast, ParseError> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Ast::Add(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Ast::Sub(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Ast, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Ast::Mul(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Ast::Div(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Ast, ParseError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            let inner = self.unary()?;
            return Ok(Ast::Neg(Box::new(inner)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Ast, ParseError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(Ast::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Ast, ParseError> {
        match self.bump() {
            Some(Token::Num(v)) => Ok(Ast::Num(v)),
            Some(Token::Ident(name)) => {
                if name == "x" {
                    return Ok(Ast::Var);
                }
                match Func::from_name(&name) {
                    Some(func) => {
                        self.eat(&Token::LParen, "(")?;
                        let arg = self.expr()?;
                        self.eat(&Token::RParen, ")")?;
                        Ok(Ast::Call(func, Box::new(arg)))
                    }
                    None => Err(ParseError::UnknownIdentifier { name }),
                }
            }
            Some(Token::LParen) => {
                let inner = self.expr()?;
                self.eat(&Token::RParen, ")")?;
                Ok(inner)
            }
            Some(t) => Err(ParseError::UnexpectedToken { found: t.to_string() }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
