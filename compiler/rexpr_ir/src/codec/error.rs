use std::io;

use thiserror::Error;

/// Failure while writing a tree.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("node kind `{name}` is not registered")]
    UnregisteredKind { name: &'static str },

    #[error("value {value} does not fit in a varint")]
    ValueOutOfRange { value: u64 },

    #[error("tree is nested deeper than {limit} levels")]
    TooDeep { limit: u32 },
}

/// Failure while reading a tree.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("stream ended early at byte {offset}")]
    UnexpectedEof { offset: usize },

    #[error("unknown node tag {tag} (registry holds {registered} kinds)")]
    UnknownTag { tag: u32, registered: usize },

    #[error("string at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("invalid root flag {value}, expected 0 or 1")]
    InvalidRootFlag { value: u8 },

    #[error("node at byte {offset} is nested deeper than {limit} levels")]
    TooDeep { limit: u32, offset: usize },

    #[error("malformed {what} at byte {offset}")]
    Malformed { what: &'static str, offset: usize },
}
