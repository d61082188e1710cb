//! Error types for tokenizing and building expression trees
//!
//! Every failure is a grammar violation detected before evaluation starts.
//! Evaluating a built tree cannot fail.

use thiserror::Error;

use crate::operator::OperatorKind;
use crate::token::Span;

/// Errors raised while turning source text into an expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A segment is neither an integer literal nor a known operator symbol
    #[error("Malformed token: `{text}` is neither an integer nor a known operator")]
    MalformedToken {
        /// The offending segment
        text: String,
        /// Location of the segment
        span: Option<Span>,
    },

    /// The input contained no tokens at all
    #[error("Empty expression")]
    EmptyExpression,

    /// The expression starts with an operator
    #[error("Unexpected operator `{operator}`: an expression must begin with a value")]
    UnexpectedOperator {
        /// The leading operator
        operator: OperatorKind,
        /// Location of the operator
        span: Option<Span>,
    },

    /// Two values follow each other with no operator between them
    #[error("Expected an operator, found value `{value}`")]
    ExpectedOperator {
        /// The value found where an operator belongs
        value: i64,
        /// Location of the value
        span: Option<Span>,
    },

    /// An operator is followed by another operator or by the end of input
    #[error("Expected a value after `{after}`, found {}", describe_found(.found))]
    ExpectedValue {
        /// The operator still waiting for its right operand
        after: OperatorKind,
        /// The operator found instead, or `None` at end of input
        found: Option<OperatorKind>,
        /// Location of the unexpected operator; `None` at end of input
        span: Option<Span>,
    },

    /// The chain has more operators than the context allows
    #[error("Expression too deep: more than {limit} operators")]
    ExpressionTooDeep {
        /// The configured operator limit
        limit: usize,
        /// Location of the first operator past the limit
        span: Option<Span>,
    },
}

impl ParseError {
    /// Source location of the error, if it points at a token.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::MalformedToken { span, .. }
            | ParseError::UnexpectedOperator { span, .. }
            | ParseError::ExpectedOperator { span, .. }
            | ParseError::ExpectedValue { span, .. }
            | ParseError::ExpressionTooDeep { span, .. } => *span,
            ParseError::EmptyExpression => None,
        }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MalformedToken { .. } => "malformed token",
            ParseError::EmptyExpression => "empty expression",
            ParseError::UnexpectedOperator { .. } => "unexpected operator",
            ParseError::ExpectedOperator { .. } => "expected operator",
            ParseError::ExpectedValue { .. } => "expected value",
            ParseError::ExpressionTooDeep { .. } => "expression too deep",
        }
    }
}

fn describe_found(found: &Option<OperatorKind>) -> String {
    match found {
        Some(op) => format!("operator `{}`", op),
        None => "end of input".to_string(),
    }
}

/// Result type alias for leftfold operations
pub type Result<T> = std::result::Result<T, ParseError>;
