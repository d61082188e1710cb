//! Tree evaluation
//!
//! Plain structural recursion: leaves return their value, binary nodes
//! evaluate left, then right, then apply their operator. Evaluation has no
//! side effects and cannot fail.

use crate::ast::{BinaryOpNode, Node, ValueNode};

/// Trait for reducing tree nodes to an integer.
pub trait Evaluate {
    /// Evaluate this node and everything below it.
    fn evaluate(&self) -> i64;
}

impl Evaluate for ValueNode {
    fn evaluate(&self) -> i64 {
        self.value
    }
}

impl Evaluate for BinaryOpNode {
    fn evaluate(&self) -> i64 {
        let left = self.left.evaluate();
        let right = self.right.evaluate();
        self.operator.apply(left, right)
    }
}

impl Evaluate for Node {
    fn evaluate(&self) -> i64 {
        match self {
            Node::Value(node) => node.evaluate(),
            Node::BinaryOp(node) => node.evaluate(),
        }
    }
}

/// Evaluate a tree (convenience wrapper).
pub fn evaluate(node: &Node) -> i64 {
    node.evaluate()
}
