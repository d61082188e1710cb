//! # leftfold
//!
//! A small interpreter for left-to-right integer expressions.
//!
//! Input is a whitespace-separated chain `VALUE (OP VALUE)*`. It is evaluated
//! strictly in token order with no operator precedence, so `1 + 2 - 3` means
//! `(1 + 2) - 3`.
//!
//! ## Architecture
//!
//! - **Tokenizer** (`lexer`): split source into typed tokens with spans
//! - **Tree Builder** (`parser`): fold tokens into a left-leaning tree
//! - **Evaluator** (`eval`): reduce the tree to an `i64`
//! - **Operator registry** (`operator`): the closed set of operators
//!
//! ```
//! use leftfold::{interpret, parse, Evaluate};
//!
//! assert_eq!(interpret("1 + 2 - 3").unwrap(), 0);
//!
//! let tree = parse("10 - 4 - 3").unwrap();
//! assert_eq!(tree.to_string(), "((10 - 4) - 3)");
//! assert_eq!(tree.evaluate(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

// Re-export main types
pub use ast::{BinaryOpNode, Node, TreeShape, ValueNode};
pub use context::{EvalContext, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use error::{ParseError, Result};
pub use eval::{evaluate, Evaluate};
pub use interpreter::{interpret, parse, Interpreter};
pub use lexer::tokenize;
pub use operator::OperatorKind;
pub use parser::{build_tree, parse_tokens, TreeBuilder};
pub use token::{Lexeme, Span, Token};

/// leftfold version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
