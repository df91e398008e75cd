use rexpr_ir::{LoadError, SaveError};
use rexpr_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Load(#[from] LoadError),

    /// The parsed tree does not render back to its source.
    #[error("tree renders as {rendered:?}, source was {expected:?}")]
    RoundTripMismatch { expected: String, rendered: String },
}

impl ExpressionError {
    /// Byte offset of a parse error.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Parse(err) => Some(err.offset),
            _ => None,
        }
    }
}
