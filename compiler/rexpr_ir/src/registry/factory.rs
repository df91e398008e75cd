//! Node construction.

use crate::ast::{
    Binary, BinaryOp, ConstValue, Constant, ExpressionList, FunctionCall, ListEntry, Name, Node,
    Parens, Unary, UnaryOp,
};
use crate::extension::{ExtensionNode, NoExtension};
use crate::registry::NodeRegistry;

/// Builds nodes of each base kind.
///
/// The parser and the loaders construct every node through this trait. An
/// embedding application overrides individual methods to return richer
/// [`Node::Extension`] nodes instead.
pub trait NodeFactory<X: ExtensionNode = NoExtension> {
    fn constant(&self, value: ConstValue, display: &str) -> Node<X> {
        Node::Constant(Constant {
            value,
            display: display.to_owned(),
        })
    }

    fn name(&self, name: &str, display: &str) -> Node<X> {
        Node::Name(Name {
            name: name.to_owned(),
            display: display.to_owned(),
        })
    }

    fn parens(&self, left: &str, inner: Node<X>, right: &str) -> Node<X> {
        Node::Parens(Parens {
            left: left.to_owned(),
            inner: Box::new(inner),
            right: right.to_owned(),
        })
    }

    fn binary(&self, op: BinaryOp, left: Node<X>, display: &str, right: Node<X>) -> Node<X> {
        Node::Binary(Binary {
            op,
            left: Box::new(left),
            display: display.to_owned(),
            right: Box::new(right),
        })
    }

    fn unary(&self, op: UnaryOp, display: &str, operand: Node<X>) -> Node<X> {
        Node::Unary(Unary {
            op,
            display: display.to_owned(),
            operand: Box::new(operand),
        })
    }

    fn call(
        &self,
        display_name: &str,
        name: &str,
        left_paren: &str,
        args: Node<X>,
        right_paren: &str,
    ) -> Node<X> {
        Node::Call(FunctionCall {
            display_name: display_name.to_owned(),
            name: name.to_owned(),
            left_paren: left_paren.to_owned(),
            args: Box::new(args),
            right_paren: right_paren.to_owned(),
        })
    }

    fn list(&self, entries: Vec<ListEntry<X>>) -> Node<X> {
        Node::List(ExpressionList { entries })
    }
}

impl<X: ExtensionNode> NodeFactory<X> for NodeRegistry<X> {}
