//! Expression tree.
//!
//! [`Node`] is a closed sum over the base node kinds plus one
//! [`Node::Extension`] arm for kinds supplied by an embedding application.
//! Each node owns its children and keeps the source fragments it was built
//! from (operator glyphs, parentheses, separators, and the whitespace after
//! them), so that rendering reproduces the parsed text exactly.

mod constant;
mod operators;

use std::fmt;

use crate::extension::{ExtensionNode, NoExtension};
use crate::stack::ensure_sufficient_stack;

pub use constant::{ConstType, ConstValue};
pub use operators::{BinaryOp, UnaryOp};

/// Tallest tree the parser builds and the registry saves or loads. A lone
/// leaf has height 1.
///
/// Drop, `Clone`, `PartialEq` and `Debug` recurse once per level without a
/// stack guard, so heights stay well below what a default thread stack
/// holds.
pub const MAX_NESTING: u32 = 256;

/// A node in an expression tree.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node<X = NoExtension> {
    Constant(Constant),
    Name(Name),
    Parens(Parens<X>),
    Binary(Binary<X>),
    Unary(Unary<X>),
    Call(FunctionCall<X>),
    List(ExpressionList<X>),
    Extension(X),
}

/// Integer literal, e.g. `$C000` or `1_000`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    pub value: ConstValue,
    /// Literal as written, with its surrounding whitespace.
    pub display: String,
}

/// Free symbolic reference. Resolution is left to the consumer.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// Identifier without whitespace.
    pub name: String,
    pub display: String,
}

/// Parenthesized sub-expression. Semantically transparent.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parens<X = NoExtension> {
    pub left: String,
    pub inner: Box<Node<X>>,
    pub right: String,
}

/// `left op right`
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binary<X = NoExtension> {
    pub op: BinaryOp,
    pub left: Box<Node<X>>,
    /// Operator glyph as written.
    pub display: String,
    pub right: Box<Node<X>>,
}

/// `op operand`
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unary<X = NoExtension> {
    pub op: UnaryOp,
    pub display: String,
    pub operand: Box<Node<X>>,
}

/// `name(args)`
///
/// `args` is an empty [`ExpressionList`] for `f()`, the lone argument for a
/// single-argument call, and an [`ExpressionList`] otherwise.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall<X = NoExtension> {
    pub display_name: String,
    pub name: String,
    pub left_paren: String,
    pub args: Box<Node<X>>,
    pub right_paren: String,
}

impl<X> FunctionCall<X> {
    /// The argument nodes, in order.
    pub fn arguments(&self) -> Vec<&Node<X>> {
        match &*self.args {
            Node::List(list) => list.iter().collect(),
            single => vec![single],
        }
    }
}

/// Comma-joined sequence of expressions.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionList<X = NoExtension> {
    pub entries: Vec<ListEntry<X>>,
}

/// One entry of an [`ExpressionList`]. The first entry's separator is empty.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListEntry<X = NoExtension> {
    pub separator: String,
    pub node: Node<X>,
}

impl<X> ExpressionList<X> {
    pub fn new() -> Self {
        ExpressionList {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, separator: impl Into<String>, node: Node<X>) {
        self.entries.push(ListEntry {
            separator: separator.into(),
            node,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nodes without their separators.
    pub fn iter(&self) -> impl Iterator<Item = &Node<X>> {
        self.entries.iter().map(|entry| &entry.node)
    }
}

impl<X> Default for ExpressionList<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: ExtensionNode> Node<X> {
    /// Registry name of this node's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Constant(c) => c.value.ty().kind_name(),
            Node::Name(_) => "Name",
            Node::Parens(_) => "Parens",
            Node::Binary(b) => b.op.kind_name(),
            Node::Unary(u) => u.op.kind_name(),
            Node::Call(_) => "FunctionCall",
            Node::List(_) => "ExpressionList",
            Node::Extension(x) => x.kind_name(),
        }
    }

    /// Write the source text this node was built from.
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Constant(c) => out.write_str(&c.display),
            Node::Name(n) => out.write_str(&n.display),
            Node::Parens(p) => {
                out.write_str(&p.left)?;
                p.inner.render(out)?;
                out.write_str(&p.right)
            }
            Node::Binary(b) => {
                b.left.render(out)?;
                out.write_str(&b.display)?;
                b.right.render(out)
            }
            Node::Unary(u) => {
                out.write_str(&u.display)?;
                u.operand.render(out)
            }
            Node::Call(c) => {
                out.write_str(&c.display_name)?;
                out.write_str(&c.left_paren)?;
                c.args.render(out)?;
                out.write_str(&c.right_paren)
            }
            Node::List(list) => {
                for entry in &list.entries {
                    out.write_str(&entry.separator)?;
                    entry.node.render(out)?;
                }
                Ok(())
            }
            Node::Extension(x) => x.render(out),
        })
    }
}

impl<X: ExtensionNode> fmt::Display for Node<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
