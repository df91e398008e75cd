//! Domain-specific node kinds.
//!
//! An embedding application describes its extra kinds as one enum
//! implementing [`ExtensionNode`] and uses `Node<ThatEnum>` throughout.
//! Each kind is registered with a [`RegistryBuilder`](crate::RegistryBuilder)
//! under the name its [`kind_name`](ExtensionNode::kind_name) returns; the
//! registry writes the tag and delegates the payload to
//! [`save_payload`](ExtensionNode::save_payload).

use std::fmt;

use crate::ast::Node;
use crate::codec::{SaveError, Writer};
use crate::registry::NodeRegistry;

/// Node kinds contributed by an embedding application.
pub trait ExtensionNode: Clone + fmt::Debug + PartialEq + Eq + Sized {
    /// Registry name of this kind. Must match the name it was registered
    /// under.
    fn kind_name(&self) -> &'static str;

    /// Write the source text the node was built from.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Write everything after the tag. Child nodes go through
    /// [`NodeRegistry::save`].
    fn save_payload(
        &self,
        writer: &mut Writer<'_>,
        registry: &NodeRegistry<Self>,
    ) -> Result<(), SaveError>;

    /// Call `f` on each direct child, left to right.
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a Node<Self>));
}

/// The empty extension: trees made only of base kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoExtension {}

impl ExtensionNode for NoExtension {
    fn kind_name(&self) -> &'static str {
        match *self {}
    }

    fn render(&self, _out: &mut dyn fmt::Write) -> fmt::Result {
        match *self {}
    }

    fn save_payload(
        &self,
        _writer: &mut Writer<'_>,
        _registry: &NodeRegistry<Self>,
    ) -> Result<(), SaveError> {
        match *self {}
    }

    fn for_each_child<'a>(&'a self, _f: &mut dyn FnMut(&'a Node<Self>)) {
        match *self {}
    }
}
