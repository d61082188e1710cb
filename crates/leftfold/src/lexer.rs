//! Tokenizer
//!
//! Splits a whitespace-separated expression into lexemes. A segment is an
//! operator when it matches a registered symbol exactly, otherwise it must be
//! an optionally-signed base-10 `i64` literal.

use crate::error::{ParseError, Result};
use crate::operator::OperatorKind;
use crate::token::{Lexeme, Span, Token};

/// Tokenize `source` into an ordered sequence of lexemes.
///
/// Fails with [`ParseError::MalformedToken`] on the first segment that is
/// neither an integer nor an operator. An all-whitespace source yields an
/// empty sequence.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>> {
    segments(source)
        .map(|(text, span)| classify(text, span))
        .collect()
}

/// Classify a single non-empty segment.
fn classify(text: &str, span: Span) -> Result<Lexeme> {
    if let Some(op) = OperatorKind::from_symbol(text) {
        return Ok(Lexeme::new(Token::Operator(op), span));
    }

    text.parse::<i64>()
        .map(|value| Lexeme::new(Token::Value(value), span))
        .map_err(|_| ParseError::MalformedToken {
            text: text.to_string(),
            span: Some(span),
        })
}

/// Iterate over whitespace-separated segments with their byte spans.
fn segments(source: &str) -> impl Iterator<Item = (&str, Span)> {
    let mut start = None;
    let mut chars = source.char_indices();

    std::iter::from_fn(move || {
        for (offset, c) in chars.by_ref() {
            match (c.is_whitespace(), start) {
                (false, None) => start = Some(offset),
                (true, Some(s)) => {
                    start = None;
                    return Some((&source[s..offset], Span::new(s, offset)));
                }
                _ => {}
            }
        }
        start
            .take()
            .map(|s| (&source[s..], Span::new(s, source.len())))
    })
}
