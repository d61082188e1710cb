use leftfold::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Tree Shape
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_tree_single_value_has_zero_depth() {
    let tree = parse("5").unwrap();
    assert_eq!(tree, Node::Value(ValueNode::new(5)));
    assert_eq!(
        tree.shape(),
        TreeShape {
            binary_nodes: 0,
            value_nodes: 1,
            depth: 0,
        }
    );
}

#[test]
fn test_tree_shape_counts() {
    for operators in 0..20usize {
        let source = std::iter::once("1".to_string())
            .chain((0..operators).map(|i| {
                let pair = if i % 2 == 0 { "+ 2" } else { "- 3" };
                pair.to_string()
            }))
            .collect::<Vec<_>>()
            .join(" ");
        let shape = parse(&source).unwrap().shape();

        assert_eq!(shape.binary_nodes, operators);
        assert_eq!(shape.value_nodes, operators + 1);
        assert_eq!(shape.depth, operators);
    }
}

#[test]
fn test_tree_every_right_child_is_value() {
    let tree = parse("1 + 2 - 3 + 4").unwrap();
    let mut rights = Vec::new();
    let mut node = &tree;
    while let Node::BinaryOp(binary) = node {
        rights.push(binary.right.value);
        node = &binary.left;
    }
    assert_eq!(rights, vec![4, 3, 2]);
    assert_eq!(node, &Node::value(1));
}

#[test]
fn test_tree_structure_explicit() {
    let tree = parse("1 + 2 - 3").unwrap();
    let expected = Node::BinaryOp(BinaryOpNode {
        operator: OperatorKind::Sub,
        left: Box::new(Node::BinaryOp(BinaryOpNode {
            operator: OperatorKind::Add,
            left: Box::new(Node::Value(ValueNode { value: 1 })),
            right: ValueNode { value: 2 },
        })),
        right: ValueNode { value: 3 },
    });
    assert_eq!(tree, expected);
}

#[test]
fn test_tree_display() {
    assert_eq!(parse("1 + 2 - 3").unwrap().to_string(), "((1 + 2) - 3)");
    assert_eq!(parse("-1 - -1").unwrap().to_string(), "(-1 - -1)");
}

#[test]
fn test_tree_operators_follow_token_order() {
    let tree = parse("1 - 2 + 3 - 4").unwrap();
    assert_eq!(
        tree.operators(),
        vec![OperatorKind::Sub, OperatorKind::Add, OperatorKind::Sub]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Building From Tokens
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_tree_from_tokenized_source() {
    let lexemes = tokenize("8 - 3").unwrap();
    assert_eq!(
        lexemes,
        vec![
            Lexeme::new(Token::Value(8), Span::new(0, 1)),
            Lexeme::new(Token::Operator(OperatorKind::Sub), Span::new(2, 3)),
            Lexeme::new(Token::Value(3), Span::new(4, 5)),
        ]
    );

    let tree = parse_tokens(&lexemes).unwrap();
    assert_eq!(tree.evaluate(), 5);

    // Token sequence is read-only input; building again gives the same tree
    assert_eq!(build_tree(&lexemes, &EvalContext::default()).unwrap(), tree);
}

// ═══════════════════════════════════════════════════════════════════════
// Serialization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_tree_serializes_to_json() {
    let tree = parse("1 + 2").unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "binary_op": {
                "operator": "+",
                "left": { "value": { "value": 1 } },
                "right": { "value": 2 }
            }
        })
    );
}

#[test]
fn test_shape_serializes_to_json() {
    let shape = parse("1 - 1 - 1").unwrap().shape();
    assert_eq!(
        serde_json::to_value(shape).unwrap(),
        serde_json::json!({ "binary_nodes": 2, "value_nodes": 3, "depth": 2 })
    );
}
