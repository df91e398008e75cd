//! The expression grammar.
//!
//! ```text
//! expression_list := expression (',' expression)*
//! expression      := or_expr
//! or_expr         := xor_expr ('|' xor_expr)*
//! xor_expr        := and_expr ('^' and_expr)*
//! and_expr        := shift_expr ('&' shift_expr)*
//! shift_expr      := add_expr (('<<' | '>>') add_expr)*
//! add_expr        := mul_expr (('+' | '-') mul_expr)*
//! mul_expr        := pow_expr (('*' | '/') pow_expr)*
//! pow_expr        := unary_expr ('**' unary_expr)*
//! unary_expr      := ('+' | '-' | '~' | '!') primary | primary
//! primary         := NAME ['(' [expression_list] ')'] | CONSTANT | '(' expression ')'
//! ```
//!
//! The free functions here are the default bodies of the [`Grammar`]
//! methods. An override that only handles some input calls the matching
//! free function for the rest.
//!
//! # Module Structure
//!
//! - `mod.rs`: the [`Grammar`] trait
//! - `expr.rs`: lists and the binary precedence chain
//! - `primary.rs`: prefix operators, names, calls, constants, groups
//! - `operators.rs`: operator matching on the current token

mod expr;
mod operators;
mod primary;

use rexpr_ir::{ExtensionNode, NoExtension, Node, NodeFactory, NodeRegistry};

use crate::{ParseError, Parser};

pub use expr::{
    add_expr, and_expr, expression, expression_list, mul_expr, or_expr, pow_expr, shift_expr,
    xor_expr,
};
pub use primary::{primary, unary_expr};

/// One overridable method per production.
///
/// Every method defaults to the free function of the same name. Nodes are
/// built through the [`NodeFactory`] supertrait, so overriding a factory
/// method changes what the unmodified grammar produces.
///
/// An override that builds a node itself records the node's height with
/// [`Parser::set_height`] so the height limit still holds.
pub trait Grammar<X: ExtensionNode = NoExtension>: NodeFactory<X> {
    fn expression_list(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        expression_list(self, p)
    }

    fn expression(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        expression(self, p)
    }

    fn or_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        or_expr(self, p)
    }

    fn xor_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        xor_expr(self, p)
    }

    fn and_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        and_expr(self, p)
    }

    fn shift_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        shift_expr(self, p)
    }

    fn add_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        add_expr(self, p)
    }

    fn mul_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        mul_expr(self, p)
    }

    fn pow_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        pow_expr(self, p)
    }

    fn unary_expr(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        unary_expr(self, p)
    }

    fn primary(&self, p: &mut Parser<'_>) -> Result<Node<X>, ParseError> {
        primary(self, p)
    }
}

impl<X: ExtensionNode> Grammar<X> for NodeRegistry<X> {}
