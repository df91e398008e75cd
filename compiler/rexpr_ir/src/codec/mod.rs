//! Byte-level encoding shared by every node kind.
//!
//! Integers use a three-case varint:
//!
//! | value            | bytes                                  |
//! |------------------|----------------------------------------|
//! | `0..=253`        | the value                              |
//! | `254..=65535`    | `254`, then 2 bytes little-endian      |
//! | `65536..=2^32-1` | `255`, then 4 bytes little-endian      |
//!
//! Strings are a varint byte length followed by the raw UTF-8 bytes.
//!
//! [`Writer`] and [`Reader`] wrap caller-supplied streams; the core never
//! opens files itself. Both also track how deep the node being written or
//! read sits, so no tree taller than [`MAX_NESTING`] crosses the codec.

mod error;

use std::io::{self, Read, Write};

pub use error::{LoadError, SaveError};

use crate::ast::MAX_NESTING;

const WORD_MARKER: u8 = 254;
const DWORD_MARKER: u8 = 255;

/// Encoder over any [`io::Write`].
pub struct Writer<'a> {
    inner: &'a mut dyn Write,
    written: usize,
    depth: u32,
}

impl<'a> Writer<'a> {
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Writer {
            inner,
            written: 0,
            depth: 0,
        }
    }

    /// Bytes written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write_u8(&mut self, byte: u8) -> Result<(), SaveError> {
        self.write_bytes(&[byte])
    }

    /// Write `value` in the varint encoding. Values above `u32::MAX` are
    /// rejected.
    pub fn write_varint(&mut self, value: u64) -> Result<(), SaveError> {
        if let Ok(byte) = u8::try_from(value) {
            if byte < WORD_MARKER {
                return self.write_u8(byte);
            }
        }
        if let Ok(word) = u16::try_from(value) {
            self.write_u8(WORD_MARKER)?;
            return self.write_bytes(&word.to_le_bytes());
        }
        match u32::try_from(value) {
            Ok(dword) => {
                self.write_u8(DWORD_MARKER)?;
                self.write_bytes(&dword.to_le_bytes())
            }
            Err(_) => Err(SaveError::ValueOutOfRange { value }),
        }
    }

    /// Write a varint length, then the bytes of `s`.
    pub fn write_str(&mut self, s: &str) -> Result<(), SaveError> {
        self.write_varint(s.len() as u64)?;
        self.write_bytes(s.as_bytes())
    }

    /// Step into a node one level below the current one.
    pub(crate) fn enter(&mut self) -> Result<(), SaveError> {
        if self.depth >= MAX_NESTING {
            return Err(SaveError::TooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SaveError> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}

/// Decoder over any [`io::Read`].
///
/// Keeps a running byte offset for error reports. After a failure the
/// underlying stream is left wherever the failed read stopped.
pub struct Reader<'a> {
    inner: &'a mut dyn Read,
    pos: usize,
    depth: u32,
}

impl<'a> Reader<'a> {
    pub fn new(inner: &'a mut dyn Read) -> Self {
        Reader {
            inner,
            pos: 0,
            depth: 0,
        }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8, LoadError> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_varint(&mut self) -> Result<u32, LoadError> {
        match self.read_u8()? {
            WORD_MARKER => {
                let mut buf = [0u8; 2];
                self.read_exact(&mut buf)?;
                Ok(u32::from(u16::from_le_bytes(buf)))
            }
            DWORD_MARKER => {
                let mut buf = [0u8; 4];
                self.read_exact(&mut buf)?;
                Ok(u32::from_le_bytes(buf))
            }
            byte => Ok(u32::from(byte)),
        }
    }

    pub fn read_string(&mut self) -> Result<String, LoadError> {
        let len = self.read_varint()?;
        let start = self.pos;
        let mut bytes = Vec::new();
        let got = io::Read::take(&mut *self.inner, u64::from(len)).read_to_end(&mut bytes)?;
        self.pos += got;
        if got as u64 != u64::from(len) {
            return Err(LoadError::UnexpectedEof { offset: self.pos });
        }
        String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 { offset: start })
    }

    /// Step into a node one level below the current one.
    pub(crate) fn enter(&mut self) -> Result<(), LoadError> {
        if self.depth >= MAX_NESTING {
            return Err(LoadError::TooDeep {
                limit: MAX_NESTING,
                offset: self.pos,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), LoadError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len();
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(LoadError::UnexpectedEof { offset: self.pos })
            }
            Err(e) => Err(LoadError::Io(e)),
        }
    }
}
