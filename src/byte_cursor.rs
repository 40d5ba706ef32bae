use crate::{BinResError, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Random-access little-endian reader over an in-memory buffer
///
/// A cursor may be a bounded view ("chunk slice") of a larger buffer. Reads
/// and seeks are always relative to the view, while error offsets are
/// reported relative to the root buffer so they can be located in the file.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
    base: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor over the whole buffer
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            base: 0,
        }
    }

    /// Current position relative to the start of this view
    pub fn position(&self) -> usize {
        self.position
    }

    /// Size of this view in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes left between the position and the end of the view
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Absolute offset of the current position in the root buffer
    pub fn absolute_position(&self) -> usize {
        self.base + self.position
    }

    /// Absolute offset of a view-relative position in the root buffer
    pub fn absolute(&self, position: usize) -> usize {
        self.base + position
    }

    /// Move to a position relative to the start of this view
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(BinResError::InvalidOffset {
                offset: self.absolute_position(),
                target: self.base.saturating_add(position),
                size: self.base + self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Advance the position by `count` bytes
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    /// Read a little-endian u32 at `position` without moving the cursor
    pub fn peek_u32_at(&self, position: usize) -> Result<u32> {
        let end = position.checked_add(4).filter(|end| *end <= self.data.len());
        match end {
            Some(end) => Ok(LittleEndian::read_u32(&self.data[position..end])),
            None => Err(BinResError::TruncatedInput {
                offset: self.absolute(position),
                needed: 4,
                remaining: self.data.len().saturating_sub(position),
            }),
        }
    }

    /// Borrow the next `count` bytes and advance past them
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(count)
    }

    /// Carve out a bounded sub-cursor of `length` bytes starting at the
    /// current position, advancing this cursor past it
    pub fn slice(&mut self, length: usize) -> Result<ByteCursor<'a>> {
        let base = self.absolute_position();
        let data = self.take(length)?;
        Ok(ByteCursor {
            data,
            position: 0,
            base,
        })
    }

    /// Sub-cursor over `[start, start + length)` of this view, leaving the
    /// position untouched
    pub fn view(&self, start: usize, length: usize) -> Result<ByteCursor<'a>> {
        let end = start.checked_add(length).filter(|end| *end <= self.data.len());
        match end {
            Some(end) => Ok(ByteCursor {
                data: &self.data[start..end],
                position: 0,
                base: self.base + start,
            }),
            None => Err(BinResError::TruncatedInput {
                offset: self.absolute(start.min(self.data.len())),
                needed: length,
                remaining: self.data.len().saturating_sub(start),
            }),
        }
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(BinResError::TruncatedInput {
                offset: self.absolute_position(),
                needed: count,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }
}
