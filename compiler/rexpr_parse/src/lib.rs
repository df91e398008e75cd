//! Recursive-descent parser for rexpr expressions.
//!
//! Precedence, loosest first: `|`, `^`, `&`, `<<` `>>`, `+` `-`, `*` `/`,
//! `**`, prefix `+ - ~ !`, then primaries (names, calls, constants,
//! parenthesized expressions). Every binary level is left-associative,
//! including `**`.
//!
//! Each production is a method on [`Grammar`], and every node is built
//! through [`NodeFactory`](rexpr_ir::NodeFactory). An embedding
//! application overrides single productions or constructors and keeps the
//! rest.
//!
//! There is no error recovery: the first error ends the parse.

mod constant;
mod error;
pub mod grammar;
mod parser;

use tracing::debug;

use rexpr_ir::{ExtensionNode, Node};

pub use constant::{parse_constant, ConstantError};
pub use error::{ParseError, ParseErrorKind};
pub use grammar::Grammar;
pub use parser::Parser;

/// Top-level production.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParseForm {
    /// One or more comma-separated expressions. A single expression is
    /// returned unwrapped.
    #[default]
    List,
    /// Exactly one expression; a top-level comma is an error.
    Single,
}

/// Parse `source` into a tree built by `grammar`.
///
/// The whole input must be consumed.
pub fn parse<X, G>(grammar: &G, source: &str, form: ParseForm) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    let mut parser = Parser::new(source);
    let result = match form {
        ParseForm::List => grammar.expression_list(&mut parser),
        ParseForm::Single => grammar.expression(&mut parser),
    }
    .and_then(|node| parser.finish().map(|()| node));

    if let Err(err) = &result {
        debug!(offset = err.offset, error = %err.kind, "parse failed");
    }
    result
}

#[cfg(test)]
mod tests;
