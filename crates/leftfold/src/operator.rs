//! Operator registry
//!
//! The set of binary operators is closed. Each `OperatorKind` maps to exactly
//! one source symbol and one pure integer function. Adding an operator means
//! adding a variant here plus its arm in [`OperatorKind::symbol`] and
//! [`OperatorKind::apply`]; the tokenizer, tree builder and evaluator pick it
//! up through [`OperatorKind::ALL`] and [`OperatorKind::from_symbol`].

use std::fmt;

use serde::Serialize;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorKind {
    /// Integer addition: `+`
    #[serde(rename = "+")]
    Add,
    /// Integer subtraction: `-`
    #[serde(rename = "-")]
    Sub,
}

impl OperatorKind {
    /// Every registered operator, in symbol-table order.
    pub const ALL: [OperatorKind; 2] = [OperatorKind::Add, OperatorKind::Sub];

    /// The source symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
        }
    }

    /// Look up an operator by its exact source symbol.
    pub fn from_symbol(symbol: &str) -> Option<OperatorKind> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to two operands.
    ///
    /// Arithmetic wraps on overflow, so this never fails.
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            OperatorKind::Add => left.wrapping_add(right),
            OperatorKind::Sub => left.wrapping_sub(right),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
