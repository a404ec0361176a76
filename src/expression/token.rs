//! Tokenisation of expression strings.

use super::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Num(v) => write!(f, "{v}"),
            Token::Ident(s) => write!(f, "{s}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Splits `src` into tokens. Whitespace separates tokens and is otherwise
/// ignored. Number literals accept an optional fraction and `e`/`E` exponent.
pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' | '\n' | '\r' => i += 1,
            '+' => { tokens.push(Token::Plus);   i += 1 }
            '-' => { tokens.push(Token::Minus);  i += 1 }
            '*' => { tokens.push(Token::Star);   i += 1 }
            '/' => { tokens.push(Token::Slash);  i += 1 }
            '^' => { tokens.push(Token::Caret);  i += 1 }
            '(' => { tokens.push(Token::LParen); i += 1 }
            ')' => { tokens.push(Token::RParen); i += 1 }
            '0'..='9' | '.' => {
                let start = i;
                i = scan_number(bytes, i);
                let lit = &src[start..i];
                let value = lit.parse::<f64>().map_err(|_| ParseError::MalformedNumber {
                    lit: lit.to_owned(),
                    pos: start,
                })?;
                tokens.push(Token::Num(value));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let start = i;
                while i < bytes.len()
                    && matches!(bytes[i] as char, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
                {
                    i += 1;
                }
                tokens.push(Token::Ident(src[start..i].to_owned()));
            }
            _ => return Err(ParseError::UnexpectedChar { ch: c, pos: i }),
        }
    }

    Ok(tokens)
}

/// Advances past one number literal starting at `i`: digits, optional `.` and
/// fraction digits, optional exponent. Returns the index one past the literal.
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    // exponent only counts when followed by a digit (or signed digit)
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}
