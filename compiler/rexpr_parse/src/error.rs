//! Parse errors.

use std::fmt::Write as _;

use rexpr_lexer::TokenKind;
use thiserror::Error;

use crate::constant::ConstantError;

/// A failed parse: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset into the source of the offending token's text.
    /// End-of-input errors point at the source length.
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The tokenizer hit a character it does not recognise.
    #[error("invalid character `{ch}`")]
    InvalidCharacter { ch: char },

    /// `display` is the token as written, whitespace included.
    #[error("unexpected {}", describe(.found, .display))]
    UnexpectedToken { found: TokenKind, display: String },

    #[error("expected {expected}, found {}", describe(.found, .display))]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        display: String,
    },

    #[error("invalid constant `{text}`: {reason}")]
    InvalidConstant { text: String, reason: ConstantError },

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: u32 },
}

fn describe(kind: &TokenKind, display: &str) -> String {
    match kind {
        TokenKind::Name | TokenKind::Constant => {
            format!("{} `{}`", kind.display_name(), display.trim())
        }
        _ => kind.display_name().to_owned(),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }

    /// The source line with a caret under the error position.
    ///
    /// ```text
    /// (1 + 2
    ///       ^ expected `)`, found end of input
    /// ```
    pub fn caret_snippet(&self, source: &str) -> String {
        let column = source
            .get(..self.offset)
            .map_or(0, |prefix| prefix.chars().count());
        let mut out = String::with_capacity(source.len() * 2 + 32);
        let _ = writeln!(out, "{source}");
        let _ = write!(out, "{:column$}^ {}", "", self.kind);
        out
    }
}
