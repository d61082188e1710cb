//! Pipeline facade: source text to tree to integer
//!
//! ```text
//! &str → [tokenize] → Vec<Lexeme> → [TreeBuilder] → Node → [Evaluate] → i64
//! ```

use crate::ast::Node;
use crate::context::EvalContext;
use crate::error::Result;
use crate::eval::Evaluate;
use crate::lexer;
use crate::parser::TreeBuilder;
use crate::token::Lexeme;

/// Runs the tokenize/build/evaluate pipeline under one context.
///
/// Holds no per-expression state; every call starts fresh, and a failed call
/// leaves the interpreter usable.
///
/// # Example
///
/// ```
/// use leftfold::Interpreter;
///
/// let interpreter = Interpreter::new();
/// assert_eq!(interpreter.interpret("1 + 2 - 3").unwrap(), 0);
/// assert!(interpreter.interpret("1 +").is_err());
/// assert_eq!(interpreter.interpret("40 + 2").unwrap(), 42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    ctx: EvalContext,
}

impl Interpreter {
    /// Create an interpreter with the default context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with a custom context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self { ctx }
    }

    /// The context this interpreter runs under.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Tokenize `source`.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Lexeme>> {
        let lexemes = lexer::tokenize(source)?;
        if self.ctx.trace {
            let tokens: Vec<String> = lexemes.iter().map(|l| l.token.to_string()).collect();
            eprintln!("[trace] tokens: [{}]", tokens.join(", "));
        }
        Ok(lexemes)
    }

    /// Tokenize `source` and build its tree.
    pub fn parse(&self, source: &str) -> Result<Node> {
        let lexemes = self.tokenize(source)?;
        let tree = TreeBuilder::new(&lexemes, &self.ctx).build()?;
        if self.ctx.trace {
            let shape = tree.shape();
            eprintln!(
                "[trace] tree: {} ({} operators, {} values)",
                tree, shape.binary_nodes, shape.value_nodes
            );
        }
        Ok(tree)
    }

    /// Evaluate an already built tree.
    pub fn evaluate(&self, tree: &Node) -> i64 {
        let result = tree.evaluate();
        if self.ctx.trace {
            eprintln!("[trace] result: {}", result);
        }
        result
    }

    /// Tokenize, build and evaluate `source`.
    pub fn interpret(&self, source: &str) -> Result<i64> {
        let tree = self.parse(source)?;
        Ok(self.evaluate(&tree))
    }
}

/// Parse `source` into a tree with the default context.
pub fn parse(source: &str) -> Result<Node> {
    Interpreter::new().parse(source)
}

/// Evaluate `source` with the default context.
pub fn interpret(source: &str) -> Result<i64> {
    Interpreter::new().interpret(source)
}
