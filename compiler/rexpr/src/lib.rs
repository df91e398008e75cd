//! Integer expressions that render back to exactly the text they were
//! parsed from.
//!
//! ```text
//! let expr: Expression = "$C000 + (offset << 1)".parse()?;
//! assert_eq!(expr.to_string(), "$C000 + (offset << 1)");
//!
//! let mut bytes = Vec::new();
//! expr.save(base_registry(), &mut bytes)?;
//! ```
//!
//! The pieces live in their own crates and are re-exported here:
//!
//! - `rexpr_lexer`: tokens and the tokenizer
//! - `rexpr_ir`: the tree, the node registry and the binary encoding
//! - `rexpr_parse`: the grammar
//!
//! Evaluation is left to the caller, typically through a [`Visitor`].

mod error;
mod expression;
mod options;

use std::sync::Once;

pub use error::ExpressionError;
pub use expression::Expression;
pub use options::ParseOptions;

pub use rexpr_ir::{
    base_registry, codec, ensure_sufficient_stack, walk_binary, walk_extension, walk_list,
    walk_node, Binary, BinaryOp, ConstType, ConstValue, Constant, ExpressionList, ExtensionNode,
    FunctionCall, ListEntry, LoadError, LoadFn, Name, NoExtension, Node, NodeFactory,
    NodeRegistry, Parens, Reader, RegistryBuilder, RegistryEntry, RegistryError, SaveError, Unary,
    UnaryOp, Visitor, Writer, MAX_NESTING,
};
pub use rexpr_lexer::{tokenize, Token, TokenKind, Tokenizer};
pub use rexpr_parse::{
    grammar, parse, parse_constant, ConstantError, Grammar, ParseError, ParseErrorKind, ParseForm,
    Parser,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, when called a second time, or
/// when the process already has a global subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
