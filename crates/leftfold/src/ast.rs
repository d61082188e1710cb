//! Expression tree
//!
//! A built tree is a left-leaning chain: every binary node takes the
//! previously built chain as its left child and a single value as its right
//! child. The right child is typed as [`ValueNode`], so the chain shape holds
//! by construction.

use std::fmt;

use serde::Serialize;

use crate::operator::OperatorKind;

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Integer leaf
    Value(ValueNode),
    /// Binary operation over two subtrees
    BinaryOp(BinaryOpNode),
}

/// Terminal node holding an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueNode {
    /// The literal value
    pub value: i64,
}

/// Binary operation node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryOpNode {
    /// The operator to apply
    pub operator: OperatorKind,
    /// Everything folded so far
    pub left: Box<Node>,
    /// The operand read together with `operator`
    pub right: ValueNode,
}

/// Node counts and depth of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TreeShape {
    /// Number of binary operation nodes
    pub binary_nodes: usize,
    /// Number of value leaves
    pub value_nodes: usize,
    /// Edges on the longest root-to-leaf path
    pub depth: usize,
}

impl ValueNode {
    /// Create a new value leaf.
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl BinaryOpNode {
    /// Create a binary node that takes ownership of `left`.
    pub fn new(operator: OperatorKind, left: Node, right: ValueNode) -> Self {
        Self {
            operator,
            left: Box::new(left),
            right,
        }
    }
}

impl Node {
    /// Create a value leaf.
    pub fn value(value: i64) -> Self {
        Node::Value(ValueNode::new(value))
    }

    /// Fold `self` into a new binary node as its left child.
    pub fn fold(self, operator: OperatorKind, right: i64) -> Self {
        Node::BinaryOp(BinaryOpNode::new(operator, self, ValueNode::new(right)))
    }

    /// Count nodes and measure depth.
    ///
    /// Walks the left spine only; right children are always leaves.
    pub fn shape(&self) -> TreeShape {
        let mut shape = TreeShape {
            value_nodes: 1,
            ..TreeShape::default()
        };
        let mut node = self;
        while let Node::BinaryOp(binary) = node {
            shape.binary_nodes += 1;
            shape.value_nodes += 1;
            shape.depth += 1;
            node = &binary.left;
        }
        shape
    }

    /// Operators in evaluation order, leftmost first.
    pub fn operators(&self) -> Vec<OperatorKind> {
        let mut ops = Vec::new();
        let mut node = self;
        while let Node::BinaryOp(binary) = node {
            ops.push(binary.operator);
            node = &binary.left;
        }
        ops.reverse();
        ops
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink the left spine one node at a time so dropping a long chain
        // does not recurse once per operator.
        let mut next = take_left(self);
        while let Some(mut node) = next {
            next = take_left(&mut node);
        }
    }
}

fn take_left(node: &mut Node) -> Option<Node> {
    match node {
        Node::BinaryOp(binary) => Some(std::mem::replace(&mut *binary.left, Node::value(0))),
        Node::Value(_) => None,
    }
}

impl From<ValueNode> for Node {
    fn from(node: ValueNode) -> Self {
        Node::Value(node)
    }
}

impl From<BinaryOpNode> for Node {
    fn from(node: BinaryOpNode) -> Self {
        Node::BinaryOp(node)
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for BinaryOpNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Value(node) => write!(f, "{}", node),
            Node::BinaryOp(node) => write!(f, "{}", node),
        }
    }
}
