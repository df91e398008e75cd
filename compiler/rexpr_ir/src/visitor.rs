//! Read-only traversal of an expression tree.
//!
//! Every `visit_*` method defaults to the matching `walk_*` function, which
//! visits the node's children. An override that does not call `walk_*`
//! stops the descent at that node.
//!
//! ```text
//! struct CollectNames<'ast>(Vec<&'ast str>);
//!
//! impl<'ast> Visitor<'ast> for CollectNames<'ast> {
//!     fn visit_name(&mut self, name: &'ast Name) {
//!         self.0.push(&name.name);
//!     }
//! }
//! ```

use crate::ast::{Binary, Constant, ExpressionList, FunctionCall, Name, Node, Parens, Unary};
use crate::extension::{ExtensionNode, NoExtension};
use crate::stack::ensure_sufficient_stack;

pub trait Visitor<'ast, X: ExtensionNode + 'ast = NoExtension> {
    /// Visit any node. Dispatches to the kind-specific method.
    fn visit_node(&mut self, node: &'ast Node<X>) {
        walk_node(self, node);
    }

    fn visit_constant(&mut self, constant: &'ast Constant) {
        let _ = constant;
    }

    fn visit_name(&mut self, name: &'ast Name) {
        let _ = name;
    }

    fn visit_parens(&mut self, parens: &'ast Parens<X>) {
        self.visit_node(&parens.inner);
    }

    fn visit_binary(&mut self, binary: &'ast Binary<X>) {
        walk_binary(self, binary);
    }

    fn visit_unary(&mut self, unary: &'ast Unary<X>) {
        self.visit_node(&unary.operand);
    }

    fn visit_call(&mut self, call: &'ast FunctionCall<X>) {
        self.visit_node(&call.args);
    }

    fn visit_list(&mut self, list: &'ast ExpressionList<X>) {
        walk_list(self, list);
    }

    fn visit_extension(&mut self, extension: &'ast X) {
        walk_extension(self, extension);
    }
}

// Walk functions visit children depth-first, left to right.

pub fn walk_node<'ast, X, V>(visitor: &mut V, node: &'ast Node<X>)
where
    X: ExtensionNode + 'ast,
    V: Visitor<'ast, X> + ?Sized,
{
    ensure_sufficient_stack(|| match node {
        Node::Constant(c) => visitor.visit_constant(c),
        Node::Name(n) => visitor.visit_name(n),
        Node::Parens(p) => visitor.visit_parens(p),
        Node::Binary(b) => visitor.visit_binary(b),
        Node::Unary(u) => visitor.visit_unary(u),
        Node::Call(c) => visitor.visit_call(c),
        Node::List(l) => visitor.visit_list(l),
        Node::Extension(x) => visitor.visit_extension(x),
    });
}

pub fn walk_binary<'ast, X, V>(visitor: &mut V, binary: &'ast Binary<X>)
where
    X: ExtensionNode + 'ast,
    V: Visitor<'ast, X> + ?Sized,
{
    visitor.visit_node(&binary.left);
    visitor.visit_node(&binary.right);
}

pub fn walk_list<'ast, X, V>(visitor: &mut V, list: &'ast ExpressionList<X>)
where
    X: ExtensionNode + 'ast,
    V: Visitor<'ast, X> + ?Sized,
{
    for node in list.iter() {
        visitor.visit_node(node);
    }
}

pub fn walk_extension<'ast, X, V>(visitor: &mut V, extension: &'ast X)
where
    X: ExtensionNode + 'ast,
    V: Visitor<'ast, X> + ?Sized,
{
    extension.for_each_child(&mut |child| visitor.visit_node(child));
}

#[cfg(test)]
mod tests;
