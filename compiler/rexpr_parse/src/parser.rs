//! Token-level parser state.

use rexpr_ir::MAX_NESTING;
use rexpr_lexer::{Token, TokenKind, Tokenizer};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

/// Parser state: the tokenizer positioned at the current token.
///
/// Grammar productions inspect the current token with [`kind`](Self::kind)
/// or [`check`](Self::check) and consume it with [`advance`](Self::advance).
///
/// The parser also bounds tree height by [`MAX_NESTING`]: every production
/// that builds a node records the node's height with
/// [`set_height`](Self::set_height).
pub struct Parser<'src> {
    source: &'src str,
    tokens: Tokenizer<'src>,
    /// Nested `expression` calls currently open.
    depth: u32,
    /// Height of the tree the last finished production built.
    height: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            source,
            tokens: Tokenizer::new(source),
            depth: 0,
            height: 0,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub fn current(&self) -> Token<'src> {
        self.tokens.current()
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.tokens.kind()
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.tokens.offset()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token<'src> {
        let token = self.tokens.advance();
        trace!(kind = %token.kind, offset = token.offset, text = token.text, "consumed token");
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let token = self.current();
        if let Some(err) = self.invalid_character() {
            return Err(err);
        }
        Err(ParseError::new(
            ParseErrorKind::ExpectedToken {
                expected: kind,
                found: token.kind,
                display: token.display.to_owned(),
            },
            token.offset,
        ))
    }

    /// Error for a current token that no production accepts.
    pub fn unexpected(&self) -> ParseError {
        if let Some(err) = self.invalid_character() {
            return err;
        }
        let token = self.current();
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: token.kind,
                display: token.display.to_owned(),
            },
            token.offset,
        )
    }

    /// Succeed only if the whole input has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.check(TokenKind::End) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Height of the tree built by the production that finished last.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Record the height of the tree a production just built. A tree taller
    /// than [`MAX_NESTING`] fails at `offset`.
    pub fn set_height(&mut self, height: u32, offset: usize) -> Result<(), ParseError> {
        if height > MAX_NESTING {
            return Err(too_deep(offset));
        }
        self.height = height;
        Ok(())
    }

    /// Open a nested expression. Fails at the current token once the
    /// nesting alone passes [`MAX_NESTING`], before the nested input is read.
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(too_deep(self.offset()));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn invalid_character(&self) -> Option<ParseError> {
        let token = self.current();
        if token.kind != TokenKind::Invalid {
            return None;
        }
        let ch = token.text.chars().next().unwrap_or_default();
        Some(ParseError::new(
            ParseErrorKind::InvalidCharacter { ch },
            token.offset,
        ))
    }
}

fn too_deep(offset: usize) -> ParseError {
    ParseError::new(ParseErrorKind::TooDeep { limit: MAX_NESTING }, offset)
}
