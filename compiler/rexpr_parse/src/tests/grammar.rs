//! Overriding productions and node constructors.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{grammar, parse, Grammar, ParseError, ParseForm, Parser};
use pretty_assertions::assert_eq;
use rexpr_ir::{ConstType, ConstValue, Constant, NoExtension, Node, NodeFactory};
use rexpr_lexer::TokenKind;

/// Builds the narrowest unsigned constant that holds each literal.
struct Narrowing;

impl NodeFactory for Narrowing {
    fn constant(&self, value: ConstValue, display: &str) -> Node {
        let value = match value.as_i64().map(u64::try_from) {
            Some(Ok(v)) if v <= u64::from(u8::MAX) => ConstValue::from_bits(ConstType::U8, v),
            Some(Ok(v)) if v <= u64::from(u16::MAX) => ConstValue::from_bits(ConstType::U16, v),
            _ => value,
        };
        Node::Constant(Constant {
            value,
            display: display.to_owned(),
        })
    }
}

impl Grammar for Narrowing {}

/// Reads `true` and `false` as constants; everything else is unchanged.
struct Booleans;

impl NodeFactory for Booleans {}

impl Grammar for Booleans {
    fn primary(&self, p: &mut Parser<'_>) -> Result<Node, ParseError> {
        let value = match (p.kind(), p.current().text) {
            (TokenKind::Name, "true") => 1,
            (TokenKind::Name, "false") => 0,
            _ => return grammar::primary(self, p),
        };
        let token = p.advance();
        p.set_height(1, token.offset)?;
        Ok(self.constant(ConstValue::I64(value), token.display))
    }
}

#[test]
fn factory_override_changes_built_nodes() {
    let node: Node = parse(&Narrowing, "$FF + $100 + 70000", ParseForm::List).unwrap();
    let mut widths = Vec::new();
    let mut current = &node;
    while let Node::Binary(b) = current {
        if let Node::Constant(c) = &*b.right {
            widths.push(c.value);
        }
        current = &b.left;
    }
    if let Node::Constant(c) = current {
        widths.push(c.value);
    }
    assert_eq!(
        widths,
        vec![
            ConstValue::I64(70000),
            ConstValue::U16(0x100),
            ConstValue::U8(0xFF)
        ]
    );
    assert_eq!(node.to_string(), "$FF + $100 + 70000");
}

#[test]
fn production_override_delegates_the_rest() {
    let node: Node = parse(&Booleans, "!true | flag", ParseForm::List).unwrap();
    let Node::Binary(or) = &node else {
        panic!("expected a binary node");
    };
    let Node::Unary(not) = &*or.left else {
        panic!("expected a unary node");
    };
    assert!(matches!(&*not.operand, Node::Constant(c) if c.value == ConstValue::I64(1)));
    assert!(matches!(&*or.right, Node::Name(n) if n.name == "flag"));
    assert_eq!(node.to_string(), "!true | flag");
}

#[test]
fn override_errors_propagate() {
    let err = parse::<NoExtension, _>(&Booleans, "true +", ParseForm::List).unwrap_err();
    assert_eq!(err.offset, 6);
}
