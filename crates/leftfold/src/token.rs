//! Tokens produced by the tokenizer

use std::fmt;

use serde::Serialize;

use crate::operator::OperatorKind;

/// Byte range of a token in its source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// An atomic lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    /// A signed integer literal
    Value(i64),
    /// An operator symbol
    Operator(OperatorKind),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Value(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    /// The token itself
    pub token: Token,
    /// Its location in the source
    pub span: Span,
}

impl Lexeme {
    /// Create a new lexeme.
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Value(-7).to_string(), "-7");
        assert_eq!(Token::Operator(OperatorKind::Add).to_string(), "+");
    }
}
