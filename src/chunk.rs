use crate::{BinResError, ByteCursor, Result};

/// Size in bytes of the framing shared by every chunk
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Generic header found at the start of every chunk, at every nesting level
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkHeader {
    /// Type identifier for this chunk
    pub ty: u16,
    /// Size of the chunk header in bytes
    pub header_size: u16,
    /// Total size of the chunk in bytes, header included
    pub size: u32,
    /// Position of the chunk start, relative to the cursor it was read from
    pub start: usize,
}

impl ChunkHeader {
    /// Read a chunk header and check that its sizes are self-consistent
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let start = cursor.position();
        let ty = cursor.read_u16()?;
        let header_size = cursor.read_u16()?;
        let size = cursor.read_u32()?;

        let header = Self {
            ty,
            header_size,
            size,
            start,
        };
        if (header_size as usize) < CHUNK_HEADER_SIZE {
            return Err(header.invalid_size(cursor, "header size smaller than chunk framing"));
        }
        if size < header_size as u32 {
            return Err(header.invalid_size(cursor, "chunk smaller than its header"));
        }
        Ok(header)
    }

    /// Read a chunk header and require it to be of type `expected`
    pub fn read_expecting(cursor: &mut ByteCursor, expected: u16) -> Result<Self> {
        let offset = cursor.absolute_position();
        let header = Self::read(cursor)?;
        if header.ty != expected {
            return Err(BinResError::UnexpectedChunkType {
                offset,
                expected,
                actual: header.ty,
            });
        }
        Ok(header)
    }

    /// Position just past the end of this chunk
    pub fn end(&self) -> usize {
        self.start + self.size as usize
    }

    /// Position of the chunk body (first byte after the header)
    pub fn body_start(&self) -> usize {
        self.start + self.header_size as usize
    }

    /// Bounded view over the whole chunk, header included
    pub fn view<'a>(&self, cursor: &ByteCursor<'a>) -> Result<ByteCursor<'a>> {
        cursor.view(self.start, self.size as usize)
    }

    fn invalid_size(&self, cursor: &ByteCursor, reason: &str) -> BinResError {
        BinResError::InvalidChunkSize {
            offset: cursor.absolute(self.start),
            declared: self.size,
            reason: format!("{} (header size {})", reason, self.header_size),
        }
    }
}
