//! Token kinds and the token value produced by the tokenizer.

use std::fmt;

/// Kind of a lexical token.
///
/// Discriminants are stable and grouped by role: operands first, then
/// operators and punctuation, then the two terminal kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Operands ===
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Name = 0,
    /// Decimal, `$`-hex or `%`-binary literal, `_` allowed as a separator.
    Constant = 1,

    // === Operators & punctuation ===
    /// `+`
    Plus = 16,
    /// `-`
    Minus = 17,
    /// `*`
    Star = 18,
    /// `/`
    Slash = 19,
    /// `**`
    Power = 20,
    /// `^`
    Caret = 21,
    /// `|`
    Pipe = 22,
    /// `&`
    Ampersand = 23,
    /// `~`
    Tilde = 24,
    /// `!`
    Bang = 25,
    /// `<<`
    Shl = 26,
    /// `>>`
    Shr = 27,
    /// `<`
    Less = 28,
    /// `>`
    Greater = 29,
    /// `(`
    LParen = 30,
    /// `)`
    RParen = 31,
    /// `,`
    Comma = 32,

    // === Terminal ===
    /// Unrecognised character. The tokenizer stops here.
    Invalid = 254,
    /// End of input.
    End = 255,
}

impl TokenKind {
    /// Fixed source text of operator and punctuation kinds.
    ///
    /// Returns `None` for kinds whose text varies (`Name`, `Constant`,
    /// `Invalid`) and for `End`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Power => Some("**"),
            Self::Caret => Some("^"),
            Self::Pipe => Some("|"),
            Self::Ampersand => Some("&"),
            Self::Tilde => Some("~"),
            Self::Bang => Some("!"),
            Self::Shl => Some("<<"),
            Self::Shr => Some(">>"),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::Comma => Some(","),
            Self::Name | Self::Constant | Self::Invalid | Self::End => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Constant => "constant",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Power => "`**`",
            Self::Caret => "`^`",
            Self::Pipe => "`|`",
            Self::Ampersand => "`&`",
            Self::Tilde => "`~`",
            Self::Bang => "`!`",
            Self::Shl => "`<<`",
            Self::Shr => "`>>`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Comma => "`,`",
            Self::Invalid => "invalid character",
            Self::End => "end of input",
        }
    }

    /// `true` for `End` and `Invalid`: the tokenizer never moves past them.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single token borrowed from the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Characters that define the token's meaning, without whitespace.
    pub text: &'src str,
    /// Exact source slice consumed for this token: any leading whitespace,
    /// the token itself, then the whitespace run that follows it.
    pub display: &'src str,
    /// Byte offset where `text` begins.
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset one past the end of `text`.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}
