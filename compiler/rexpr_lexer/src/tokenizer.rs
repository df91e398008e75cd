//! Lazy tokenizer producing one [`Token`] at a time.
//!
//! Classification rules, in priority order:
//!
//! 1. identifier: letter or `_`, then letters, digits, `_`
//! 2. constant: a digit, `$` (hex) or `%` (binary), then digits of that base
//!    and `_` separators
//! 3. two-byte operators `<<`, `>>`, `**`, checked before their one-byte prefix
//! 4. one-byte operators and punctuation `+ - * / ( ) ^ | & ~ < > ! ,`
//! 5. anything else is [`TokenKind::Invalid`], a terminal error state
//! 6. end of input is [`TokenKind::End`], a terminal non-error state
//!
//! After a token is classified, the whitespace that follows it is folded into
//! its display text, so the next token's display text starts clean.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Tokenizer over a single expression string.
///
/// Holds exactly one "current" token. [`Tokenizer::advance`] replaces it with
/// the next one until a terminal kind is reached, after which it stays put.
#[derive(Clone, Debug)]
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    current: Token<'src>,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer and classify the first token.
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Cursor::new(source);
        let current = scan(&mut cursor);
        Self { cursor, current }
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> Token<'src> {
        self.current
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn text(&self) -> &'src str {
        self.current.text
    }

    #[inline]
    pub fn display(&self) -> &'src str {
        self.current.display
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.current.offset
    }

    /// `true` once an unrecognised character has been reached.
    #[inline]
    pub fn errored(&self) -> bool {
        self.current.kind == TokenKind::Invalid
    }

    /// `true` once the tokenizer is in either terminal state.
    #[inline]
    pub fn finished(&self) -> bool {
        self.current.kind.is_terminal()
    }

    /// Move to the next token and return the one just consumed.
    ///
    /// In a terminal state this is a no-op that keeps returning the
    /// terminal token.
    pub fn advance(&mut self) -> Token<'src> {
        let consumed = self.current;
        if !self.finished() {
            self.current = scan(&mut self.cursor);
        }
        consumed
    }
}

/// Tokenize `source` eagerly, up to and including the terminal token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.advance();
        tokens.push(token);
        if token.kind.is_terminal() {
            return tokens;
        }
    }
}

/// Classify the token starting at the cursor.
fn scan<'src>(cursor: &mut Cursor<'src>) -> Token<'src> {
    let display_start = cursor.pos();
    cursor.eat_whitespace();
    let start = cursor.pos();

    if cursor.is_eof() {
        return Token {
            kind: TokenKind::End,
            text: "",
            display: cursor.slice_from(display_start),
            offset: start,
        };
    }

    let kind = match cursor.current() {
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
            cursor.advance();
            cursor.eat_while(is_ident_continue);
            TokenKind::Name
        }
        b'0'..=b'9' => {
            cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            TokenKind::Constant
        }
        b'$' => {
            cursor.advance();
            cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
            TokenKind::Constant
        }
        b'%' => {
            cursor.advance();
            cursor.eat_while(|b| b == b'0' || b == b'1' || b == b'_');
            TokenKind::Constant
        }
        b'<' => pair(cursor, b'<', TokenKind::Shl, TokenKind::Less),
        b'>' => pair(cursor, b'>', TokenKind::Shr, TokenKind::Greater),
        b'*' => pair(cursor, b'*', TokenKind::Power, TokenKind::Star),
        b'+' => single(cursor, TokenKind::Plus),
        b'-' => single(cursor, TokenKind::Minus),
        b'/' => single(cursor, TokenKind::Slash),
        b'(' => single(cursor, TokenKind::LParen),
        b')' => single(cursor, TokenKind::RParen),
        b'^' => single(cursor, TokenKind::Caret),
        b'|' => single(cursor, TokenKind::Pipe),
        b'&' => single(cursor, TokenKind::Ampersand),
        b'~' => single(cursor, TokenKind::Tilde),
        b'!' => single(cursor, TokenKind::Bang),
        b',' => single(cursor, TokenKind::Comma),
        _ => {
            // Terminal: the whitespace after an invalid character is left
            // unconsumed.
            cursor.advance_char();
            return Token {
                kind: TokenKind::Invalid,
                text: cursor.slice_from(start),
                display: cursor.slice_from(display_start),
                offset: start,
            };
        }
    };

    let end = cursor.pos();
    cursor.eat_whitespace();
    Token {
        kind,
        text: cursor.slice(start, end),
        display: cursor.slice_from(display_start),
        offset: start,
    }
}

/// One-byte token.
#[inline]
fn single(cursor: &mut Cursor<'_>, kind: TokenKind) -> TokenKind {
    cursor.advance();
    kind
}

/// Two-byte token when the lookahead is exactly `second`, else the
/// one-byte prefix.
#[inline]
fn pair(cursor: &mut Cursor<'_>, second: u8, doubled: TokenKind, lone: TokenKind) -> TokenKind {
    cursor.advance();
    if cursor.current() == second {
        cursor.advance();
        doubled
    } else {
        lone
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
