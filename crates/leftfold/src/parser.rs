//! Tree builder
//!
//! Consumes lexemes left to right and folds them into a single tree. The
//! grammar is `VALUE (OP VALUE)*`; each `OP VALUE` pair wraps everything built
//! so far as the left child of a new binary node. There is no precedence:
//! tree shape is token order.

use crate::ast::Node;
use crate::context::EvalContext;
use crate::error::{ParseError, Result};
use crate::operator::OperatorKind;
use crate::token::{Lexeme, Token};

/// Single-use builder over a borrowed lexeme sequence.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    lexemes: &'a [Lexeme],
    cursor: usize,
    ctx: &'a EvalContext,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder positioned at the first lexeme.
    pub fn new(lexemes: &'a [Lexeme], ctx: &'a EvalContext) -> Self {
        Self {
            lexemes,
            cursor: 0,
            ctx,
        }
    }

    /// Build the tree, consuming the builder.
    pub fn build(mut self) -> Result<Node> {
        let first = self.advance().ok_or(ParseError::EmptyExpression)?;
        let mut current = match first.token {
            Token::Value(value) => Node::value(value),
            Token::Operator(operator) => {
                return Err(ParseError::UnexpectedOperator {
                    operator,
                    span: Some(first.span),
                })
            }
        };

        let mut depth = 0;
        while let Some(lexeme) = self.advance() {
            let operator = expect_operator(lexeme)?;
            let value = self.expect_value(operator)?;

            if depth >= self.ctx.depth_limit() {
                return Err(ParseError::ExpressionTooDeep {
                    limit: self.ctx.depth_limit(),
                    span: Some(lexeme.span),
                });
            }

            current = current.fold(operator, value);
            depth += 1;
        }

        Ok(current)
    }

    fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.cursor).copied();
        if lexeme.is_some() {
            self.cursor += 1;
        }
        lexeme
    }

    /// Read the right operand of `after`.
    fn expect_value(&mut self, after: OperatorKind) -> Result<i64> {
        match self.advance() {
            Some(Lexeme {
                token: Token::Value(value),
                ..
            }) => Ok(value),
            Some(Lexeme {
                token: Token::Operator(found),
                span,
            }) => Err(ParseError::ExpectedValue {
                after,
                found: Some(found),
                span: Some(span),
            }),
            None => Err(ParseError::ExpectedValue {
                after,
                found: None,
                span: None,
            }),
        }
    }
}

fn expect_operator(lexeme: Lexeme) -> Result<OperatorKind> {
    match lexeme.token {
        Token::Operator(operator) => Ok(operator),
        Token::Value(value) => Err(ParseError::ExpectedOperator {
            value,
            span: Some(lexeme.span),
        }),
    }
}

/// Build a tree under the given context.
pub fn build_tree(lexemes: &[Lexeme], ctx: &EvalContext) -> Result<Node> {
    TreeBuilder::new(lexemes, ctx).build()
}

/// Build a tree with the default context.
pub fn parse_tokens(lexemes: &[Lexeme]) -> Result<Node> {
    build_tree(lexemes, &EvalContext::default())
}
