//! Node registry: the tag catalogue for serialization and the factory used
//! to build nodes.
//!
//! Tags are assigned in registration order starting at 0, and that order is
//! the wire contract between writer and reader. The base kinds always come
//! first (see [`base`]), so registering extension kinds never changes the
//! tags of base kinds.
//!
//! Registration happens on a [`RegistryBuilder`]; once built, a
//! [`NodeRegistry`] is immutable and can be shared across threads.

mod base;
mod factory;

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::ast::Node;
use crate::codec::{LoadError, Reader, SaveError, Writer};
use crate::extension::{ExtensionNode, NoExtension};
use crate::stack::ensure_sufficient_stack;

pub use factory::NodeFactory;

/// Reads one node's payload (the tag has already been consumed).
pub type LoadFn<X> = fn(&mut Reader<'_>, &NodeRegistry<X>) -> Result<Node<X>, LoadError>;

/// One registered node kind.
pub struct RegistryEntry<X = NoExtension> {
    pub tag: u32,
    pub name: &'static str,
    pub load: LoadFn<X>,
}

impl<X> Clone for RegistryEntry<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X> Copy for RegistryEntry<X> {}

impl<X> fmt::Debug for RegistryEntry<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("node kind `{name}` is already registered")]
    DuplicateKind { name: &'static str },

    #[error("registry cannot hold more than {max} kinds")]
    TooManyKinds { max: u32 },
}

/// Collects registrations before any tree is saved or loaded.
pub struct RegistryBuilder<X = NoExtension> {
    entries: Vec<RegistryEntry<X>>,
    tags: FxHashMap<&'static str, u32>,
}

impl<X: ExtensionNode> RegistryBuilder<X> {
    /// A builder already holding the base kinds.
    pub fn new() -> Self {
        let mut builder = RegistryBuilder {
            entries: Vec::new(),
            tags: FxHashMap::default(),
        };
        for (name, load) in base::entries::<X>() {
            // Base names are distinct constants.
            let _ = builder.register(name, load);
        }
        builder
    }

    /// Append a kind and return its tag.
    pub fn register(&mut self, name: &'static str, load: LoadFn<X>) -> Result<u32, RegistryError> {
        if self.tags.contains_key(name) {
            return Err(RegistryError::DuplicateKind { name });
        }
        let tag = u32::try_from(self.entries.len())
            .map_err(|_| RegistryError::TooManyKinds { max: u32::MAX })?;
        self.entries.push(RegistryEntry { tag, name, load });
        self.tags.insert(name, tag);
        Ok(tag)
    }

    pub fn build(self) -> NodeRegistry<X> {
        debug!(kinds = self.entries.len(), "node registry built");
        NodeRegistry {
            entries: self.entries,
            tags: self.tags,
        }
    }
}

impl<X: ExtensionNode> Default for RegistryBuilder<X> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable catalogue of node kinds.
pub struct NodeRegistry<X = NoExtension> {
    entries: Vec<RegistryEntry<X>>,
    tags: FxHashMap<&'static str, u32>,
}

impl<X: ExtensionNode> NodeRegistry<X> {
    pub fn builder() -> RegistryBuilder<X> {
        RegistryBuilder::new()
    }

    /// A registry holding only the base kinds.
    pub fn base() -> Self {
        RegistryBuilder::new().build()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, tag: u32) -> Option<&RegistryEntry<X>> {
        usize::try_from(tag).ok().and_then(|i| self.entries.get(i))
    }

    pub fn tag_of(&self, name: &str) -> Option<u32> {
        self.tags.get(name).copied()
    }

    /// Entries in tag order.
    pub fn entries(&self) -> &[RegistryEntry<X>] {
        &self.entries
    }

    /// Write `node`'s tag followed by its payload.
    pub fn save(&self, node: &Node<X>, writer: &mut Writer<'_>) -> Result<(), SaveError> {
        ensure_sufficient_stack(|| {
            writer.enter()?;
            let result = self.save_node(node, writer);
            writer.leave();
            result
        })
    }

    /// Read a tag and dispatch to the matching entry's loader.
    ///
    /// Nodes nested deeper than [`MAX_NESTING`](crate::MAX_NESTING) fail
    /// with [`LoadError::TooDeep`] before their tag is read.
    pub fn load(&self, reader: &mut Reader<'_>) -> Result<Node<X>, LoadError> {
        ensure_sufficient_stack(|| {
            reader.enter()?;
            let result = self.load_node(reader);
            reader.leave();
            result
        })
    }

    fn save_node(&self, node: &Node<X>, writer: &mut Writer<'_>) -> Result<(), SaveError> {
        let name = node.kind_name();
        let Some(tag) = self.tag_of(name) else {
            debug!(kind = name, "cannot save unregistered node kind");
            return Err(SaveError::UnregisteredKind { name });
        };
        writer.write_varint(u64::from(tag))?;
        base::save_payload(node, writer, self)
    }

    fn load_node(&self, reader: &mut Reader<'_>) -> Result<Node<X>, LoadError> {
        let tag = reader.read_varint()?;
        let Some(entry) = self.entry(tag) else {
            debug!(tag, registered = self.len(), offset = reader.position(), "unknown node tag");
            return Err(LoadError::UnknownTag {
                tag,
                registered: self.len(),
            });
        };
        (entry.load)(reader, self)
    }
}

impl<X> fmt::Debug for NodeRegistry<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.tag, e.name)))
            .finish()
    }
}

/// Process-wide registry of the base kinds.
pub fn base_registry() -> &'static NodeRegistry {
    static BASE: OnceLock<NodeRegistry> = OnceLock::new();
    BASE.get_or_init(NodeRegistry::base)
}
