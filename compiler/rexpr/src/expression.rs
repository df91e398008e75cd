//! The public unit: an optional tree plus the text it came from.

use std::fmt;
use std::io;
use std::str::FromStr;

use rexpr_ir::{base_registry, ExtensionNode, NoExtension, Node, NodeRegistry, Reader, Writer};
use rexpr_parse::Grammar;
use tracing::debug;

use crate::{ExpressionError, LoadError, ParseOptions};

const NO_ROOT: u8 = 0;
const HAS_ROOT: u8 = 1;

/// A parsed or loaded expression.
///
/// Starts empty. A successful parse or load replaces the root; a failed one
/// clears it, so no partial tree is ever observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression<X = NoExtension> {
    root: Option<Node<X>>,
    /// Parsed text, or the rendering of a loaded tree.
    source: String,
}

impl<X> Default for Expression<X> {
    fn default() -> Self {
        Expression {
            root: None,
            source: String::new(),
        }
    }
}

impl Expression {
    /// Parse with the base grammar and default options.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        let mut expr = Self::new();
        expr.parse_with(base_registry(), text, &ParseOptions::default())?;
        Ok(expr)
    }
}

impl<X: ExtensionNode> Expression<X> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` with `grammar`, replacing the current root.
    pub fn parse_with<G>(
        &mut self,
        grammar: &G,
        text: &str,
        options: &ParseOptions,
    ) -> Result<(), ExpressionError>
    where
        G: Grammar<X> + ?Sized,
    {
        self.root = None;
        self.source = text.to_owned();

        let root = rexpr_parse::parse(grammar, text, options.form)?;
        self.root = Some(root);
        if options.verify_round_trip {
            if let Err(err) = self.verify_round_trip() {
                self.root = None;
                return Err(err);
            }
        }
        debug!(source = text, "expression parsed");
        Ok(())
    }

    #[inline]
    pub fn root(&self) -> Option<&Node<X>> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Node<X>> {
        self.root
    }

    /// Replace the root with a tree built elsewhere. The source becomes the
    /// tree's rendering.
    pub fn set_root(&mut self, root: Option<Node<X>>) {
        self.source = root.as_ref().map(ToString::to_string).unwrap_or_default();
        self.root = root;
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Write the root's source text. An empty expression writes nothing.
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match &self.root {
            Some(root) => root.render(out),
            None => Ok(()),
        }
    }

    /// Check that the root renders back to the source exactly.
    pub fn verify_round_trip(&self) -> Result<(), ExpressionError> {
        let rendered = self.to_string();
        if rendered == self.source {
            Ok(())
        } else {
            Err(ExpressionError::RoundTripMismatch {
                expected: self.source.clone(),
                rendered,
            })
        }
    }

    /// Write a root-present flag byte, then the root through `registry`.
    pub fn save(
        &self,
        registry: &NodeRegistry<X>,
        out: &mut dyn io::Write,
    ) -> Result<(), ExpressionError> {
        let mut writer = Writer::new(out);
        match &self.root {
            Some(root) => {
                writer.write_u8(HAS_ROOT)?;
                registry.save(root, &mut writer)?;
            }
            None => writer.write_u8(NO_ROOT)?,
        }
        debug!(bytes = writer.written(), "expression saved");
        Ok(())
    }

    /// Read what [`save`](Self::save) wrote, replacing the current root.
    ///
    /// On failure the expression is left empty and `input` is left wherever
    /// reading stopped.
    pub fn load(
        &mut self,
        registry: &NodeRegistry<X>,
        input: &mut dyn io::Read,
    ) -> Result<(), ExpressionError> {
        self.set_root(None);
        let mut reader = Reader::new(input);
        let root = match read_root(registry, &mut reader) {
            Ok(root) => root,
            Err(err) => {
                debug!(offset = reader.position(), error = %err, "expression load failed");
                return Err(err.into());
            }
        };
        self.set_root(root);
        Ok(())
    }
}

fn read_root<X: ExtensionNode>(
    registry: &NodeRegistry<X>,
    reader: &mut Reader<'_>,
) -> Result<Option<Node<X>>, LoadError> {
    match reader.read_u8()? {
        NO_ROOT => Ok(None),
        HAS_ROOT => registry.load(reader).map(Some),
        value => Err(LoadError::InvalidRootFlag { value }),
    }
}

impl<X: ExtensionNode> fmt::Display for Expression<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests;
