#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{
    BinaryOp, ConstValue, NodeFactory, ParseError, ParseErrorKind, ParseForm, MAX_NESTING,
};
use pretty_assertions::assert_eq;

#[test]
fn starts_empty() {
    let expr = Expression::<NoExtension>::new();
    assert!(expr.is_empty());
    assert_eq!(expr.to_string(), "");
    assert_eq!(expr.source(), "");
}

#[test]
fn parse_keeps_source_and_root() {
    let expr: Expression = "$C000 + (offset << 1)".parse().unwrap();
    assert_eq!(expr.source(), "$C000 + (offset << 1)");
    assert_eq!(expr.to_string(), "$C000 + (offset << 1)");
    assert!(matches!(expr.root(), Some(Node::Binary(b)) if b.op == BinaryOp::Add));
}

#[test]
fn failed_parse_clears_root() {
    let mut expr = Expression::parse("1 + 2").unwrap();
    let err = expr
        .parse_with(base_registry(), "1 + ", &ParseOptions::default())
        .unwrap_err();
    assert_eq!(err.offset(), Some(4));
    assert!(expr.is_empty());
}

#[test]
fn single_form_option() {
    let mut expr = Expression::new();
    let options = ParseOptions::default().with_form(ParseForm::Single);
    assert!(expr.parse_with(base_registry(), "1, 2", &options).is_err());
    assert!(expr
        .parse_with(base_registry(), "1, 2", &ParseOptions::default())
        .is_ok());
    assert!(matches!(expr.root(), Some(Node::List(l)) if l.len() == 2));
}

#[test]
fn verification_catches_lossy_factories() {
    /// Drops the operator's trailing whitespace.
    struct Lossy;

    impl NodeFactory for Lossy {
        fn binary(&self, op: BinaryOp, left: Node, display: &str, right: Node) -> Node {
            base_registry().binary(op, left, display.trim_end(), right)
        }
    }

    impl rexpr_parse::Grammar for Lossy {}

    let mut expr = Expression::new();
    let strict = ParseOptions::default().with_verify_round_trip(true);
    let err = expr.parse_with(&Lossy, "1 + 2", &strict).unwrap_err();
    assert!(matches!(
        err,
        ExpressionError::RoundTripMismatch { ref expected, ref rendered }
            if expected == "1 + 2" && rendered == "1 +2"
    ));
    assert!(expr.is_empty());

    let lax = strict.with_verify_round_trip(false);
    expr.parse_with(&Lossy, "1 + 2", &lax).unwrap();
    assert_eq!(expr.to_string(), "1 +2");
}

#[test]
fn set_root_updates_source() {
    let r = base_registry();
    let mut expr = Expression::new();
    expr.set_root(Some(r.constant(ConstValue::I64(5), "5 ")));
    assert_eq!(expr.source(), "5 ");
    expr.verify_round_trip().unwrap();
    expr.set_root(None);
    assert!(expr.is_empty());
    assert_eq!(expr.source(), "");
}

#[test]
fn save_writes_root_flag() {
    let mut bytes = Vec::new();
    Expression::new().save(base_registry(), &mut bytes).unwrap();
    assert_eq!(bytes, vec![0]);

    let mut bytes = Vec::new();
    Expression::parse("x").unwrap().save(base_registry(), &mut bytes).unwrap();
    assert_eq!(bytes, vec![1, 8, 1, b'x', 1, b'x']);
}

#[test]
fn load_restores_tree_and_source() {
    let original = Expression::parse("f(1, $2) ** ~y").unwrap();
    let mut bytes = Vec::new();
    original.save(base_registry(), &mut bytes).unwrap();

    let mut loaded = Expression::new();
    loaded.load(base_registry(), &mut bytes.as_slice()).unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.source(), "f(1, $2) ** ~y");
}

#[test]
fn load_of_empty_expression() {
    let mut expr = Expression::parse("1").unwrap();
    expr.load(base_registry(), &mut [0u8].as_slice()).unwrap();
    assert!(expr.is_empty());
}

#[test]
fn bad_root_flag_is_rejected() {
    let mut expr = Expression::parse("1").unwrap();
    let err = expr.load(base_registry(), &mut [2u8].as_slice()).unwrap_err();
    assert!(matches!(
        err,
        ExpressionError::Load(LoadError::InvalidRootFlag { value: 2 })
    ));
    assert!(expr.is_empty());
}

#[test]
fn failed_load_leaves_no_partial_tree() {
    let mut expr = Expression::new();
    // Add with a Name on the left and nothing after it.
    let err = expr
        .load(base_registry(), &mut [1u8, 9, 8, 1, b'a', 1, b'a'].as_slice())
        .unwrap_err();
    assert!(matches!(
        err,
        ExpressionError::Load(LoadError::UnexpectedEof { .. })
    ));
    assert!(expr.is_empty());
}

#[test]
fn into_root_hands_over_the_tree() {
    let root = Expression::parse("lo(x) | 1").unwrap().into_root().unwrap();
    assert!(matches!(&root, Node::Binary(b) if b.op == BinaryOp::Or));
    assert_eq!(root.to_string(), "lo(x) | 1");
    assert_eq!(Expression::new().into_root(), None::<Node>);
}

#[test]
fn overly_nested_text_is_an_error() {
    let text = format!("{}x{}", "(".repeat(300_000), ")".repeat(300_000));
    let mut expr = Expression::parse("1").unwrap();
    let err = expr
        .parse_with(base_registry(), &text, &ParseOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ExpressionError::Parse(ParseError {
            kind: ParseErrorKind::TooDeep { .. },
            ..
        })
    ));
    assert_eq!(err.offset(), Some(MAX_NESTING as usize));
    assert!(expr.is_empty());
}

#[test]
fn overly_nested_stream_is_an_error() {
    // Root flag, 300 000 Negate nodes, then a ConstantI64.
    let mut bytes = vec![1u8];
    bytes.extend([20u8, 0].repeat(300_000));
    bytes.extend([7u8, 0, 0, 0]);

    let mut expr = Expression::new();
    let err = expr.load(base_registry(), &mut bytes.as_slice()).unwrap_err();
    assert!(matches!(
        err,
        ExpressionError::Load(LoadError::TooDeep { limit, .. }) if limit == MAX_NESTING
    ));
    assert!(expr.is_empty());
}
