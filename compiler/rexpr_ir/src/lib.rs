//! Expression tree model for rexpr.
//!
//! - [`ast`]: the closed set of node kinds and their operators
//! - [`ExtensionNode`]: the seam through which an embedding application adds
//!   its own node kinds
//! - [`Visitor`]: depth-first traversal
//! - [`codec`]: varint and string encoding over caller-supplied streams
//! - [`NodeRegistry`]: tag catalogue used to build, save and load nodes
//!
//! Every node owns its children. Rendering a node (its `Display` impl)
//! writes back the exact text it was parsed from.

pub mod ast;
pub mod codec;
mod extension;
pub mod registry;
mod stack;
mod visitor;

pub use ast::{
    Binary, BinaryOp, ConstType, ConstValue, Constant, ExpressionList, FunctionCall, ListEntry,
    Name, Node, Parens, Unary, UnaryOp, MAX_NESTING,
};
pub use codec::{LoadError, Reader, SaveError, Writer};
pub use extension::{ExtensionNode, NoExtension};
pub use registry::{
    base_registry, LoadFn, NodeFactory, NodeRegistry, RegistryBuilder, RegistryEntry,
    RegistryError,
};
pub use stack::ensure_sufficient_stack;
pub use visitor::{walk_binary, walk_extension, walk_list, walk_node, Visitor};
