//! Tokenizer for rexpr symbolic expressions.
//!
//! Expressions are short, single-line strings typed by a user, such as
//! `$C000 + (offset << 1)`. The tokenizer turns such a string into a lazy
//! stream of [`Token`]s, one at a time. Every token remembers two pieces of
//! text:
//!
//! - the *canonical* text, i.e. the characters that give the token its
//!   meaning (`1_000`, `<<`, `label`)
//! - the *display* text, i.e. the exact slice of source consumed to produce
//!   it, including the horizontal whitespace that follows it
//!
//! Concatenating the display text of every token up to and including
//! [`TokenKind::End`] reproduces the source byte-for-byte. The parser relies
//! on this to keep rendered expressions identical to what the user typed.
//!
//! # Layers
//!
//! - [`Cursor`]: byte cursor with a virtual `0x00` sentinel at end of input
//! - [`Tokenizer`]: classifies the next run of bytes into a [`Token`]
//!
//! This crate has no dependency on the rest of the workspace.

mod cursor;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
