//! Byte cursor over expression source.
//!
//! The cursor walks the source byte-by-byte. Reads past the end return a
//! virtual sentinel (`0x00`) instead of panicking, so scanning loops driven
//! by byte-classification predicates terminate on their own at end of input.
//!
//! # Interior Null Bytes
//!
//! A `0x00` byte inside the source also reads as `0x00`. Use
//! [`Cursor::is_eof`] to tell the two apart: a null at `pos < len` is
//! interior (and lexes as an invalid token), a null at `pos >= len` is EOF.

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so callers can snapshot and restore it freely.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract `start..end` of the source.
    ///
    /// Both bounds come from cursor positions, which only ever land on
    /// character boundaries (see [`Cursor::advance_char`]). An out-of-range
    /// request yields an empty string rather than panicking.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false`, otherwise the loop stops only at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs only).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_horizontal_whitespace);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    ///
    /// Keeps the cursor on a character boundary when it steps over
    /// non-ASCII input, which the tokenizer reports as invalid.
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source.len());
        while !self.source.is_char_boundary(self.pos) {
            self.pos += 1;
        }
    }
}

/// Space or tab. Newlines are not expected in expressions.
#[inline]
pub(crate) fn is_horizontal_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
