use crate::model::LinePos;
use crate::stream::{DebugError, DebugResult};

/// Sequential reader over an immutable byte buffer.
///
/// All multi-byte integers in a debug file are big-endian.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Consume exactly `n` bytes.
    pub fn read(&mut self, n: usize) -> DebugResult<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DebugError::UnexpectedEndOfStream {
                offset: self.pos,
                needed: n,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> DebugResult<u8> {
        Ok(self.read(1)?[0])
    }

    pub fn read_u16(&mut self) -> DebugResult<u16> {
        let b = self.read(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Three-byte big-endian value, zero-extended.
    pub fn read_u24(&mut self) -> DebugResult<u32> {
        let b = self.read(3)?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    pub fn read_line_pos(&mut self) -> DebugResult<LinePos> {
        let b = self.read(4)?;
        Ok(LinePos::new(b[0], u16::from_be_bytes([b[1], b[2]]), b[3]))
    }

    /// Bytes up to (not including) the next zero byte, decoded as Latin-1.
    ///
    /// An immediate terminator yields an empty string; running out of bytes
    /// before the terminator is an error.
    pub fn read_cstring(&mut self) -> DebugResult<String> {
        let start = self.pos;
        let rest = &self.data[start..];
        match rest.iter().position(|&b| b == 0) {
            Some(len) => {
                self.pos += len + 1;
                Ok(rest[..len].iter().map(|&b| char::from(b)).collect())
            }
            None => {
                // Leave the cursor where the string began so the error offset is useful.
                Err(DebugError::UnexpectedEndOfStream {
                    offset: start,
                    needed: rest.len() + 1,
                    remaining: rest.len(),
                })
            }
        }
    }
}
