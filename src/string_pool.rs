use crate::chunk::CHUNK_HEADER_SIZE;
use crate::{BinResError, ByteCursor, ChunkHeader, NO_INDEX, RES_STRING_POOL_TYPE, Result};
use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian};
use log::{trace, warn};
use quick_xml::escape::escape;

bitflags! {
    /// Flags stored in the string pool header
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StringPoolFlags: u32 {
        /// Strings are sorted by value
        const SORTED = 1 << 0;
        /// Strings are stored as UTF-8 rather than UTF-16
        const UTF8 = 1 << 8;
    }
}

/// A styled run over a pool string
///
/// `name` indexes the pool for the tag name (`b`, `i`,
/// `font;color=#ff0000`, ...); `first_char` and `last_char` are inclusive
/// UTF-16 unit positions in the styled string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StyleSpan {
    pub name: u32,
    pub first_char: u32,
    pub last_char: u32,
}

const SPAN_END: u32 = 0xFFFF_FFFF;

/// Decoded string pool chunk
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringPool {
    strings: Vec<String>,
    styles: Vec<Vec<StyleSpan>>,
    flags: StringPoolFlags,
}

impl StringPool {
    /// Decode the string pool chunk at the cursor position, leaving the
    /// cursor just past the chunk
    pub fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        let header = ChunkHeader::read_expecting(cursor, RES_STRING_POOL_TYPE)?;
        let mut chunk = header.view(cursor)?;
        cursor.seek(header.end())?;

        chunk.seek(CHUNK_HEADER_SIZE)?;
        let string_count = chunk.read_u32()?;
        let style_count = chunk.read_u32()?;
        let flags = StringPoolFlags::from_bits_retain(chunk.read_u32()?);
        let strings_start = chunk.read_u32()? as usize;
        let styles_start = chunk.read_u32()? as usize;
        trace!(
            "String pool at {:#x}: {} strings, {} styles, utf8: {}",
            chunk.absolute(0),
            string_count,
            style_count,
            flags.contains(StringPoolFlags::UTF8)
        );

        chunk.seek(header.header_size as usize)?;
        let string_offsets = read_offsets(&mut chunk, string_count, "string")?;
        let style_offsets = read_offsets(&mut chunk, style_count, "style")?;

        let mut strings = Vec::with_capacity(string_offsets.len());
        if !string_offsets.is_empty() {
            let strings_end = if style_count > 0 && styles_start != 0 {
                styles_start
            } else {
                chunk.size()
            };
            if strings_start > strings_end || strings_end > chunk.size() {
                return Err(corrupt(
                    chunk.absolute(0),
                    format!(
                        "strings region {:#x}..{:#x} outside chunk of {} bytes",
                        strings_start,
                        strings_end,
                        chunk.size()
                    ),
                ));
            }
            let region = chunk.view(strings_start, strings_end - strings_start)?;
            let utf8 = flags.contains(StringPoolFlags::UTF8);
            for offset in string_offsets {
                let offset = offset as usize;
                if offset >= region.size() {
                    return Err(corrupt(
                        region.absolute(0),
                        format!(
                            "string offset {:#x} outside strings region of {} bytes",
                            offset,
                            region.size()
                        ),
                    ));
                }
                let string = if utf8 {
                    decode_utf8(&region, offset)?
                } else {
                    decode_utf16(&region, offset)?
                };
                strings.push(string);
            }
        }

        let mut styles = Vec::with_capacity(style_offsets.len());
        if !style_offsets.is_empty() {
            if styles_start > chunk.size() {
                return Err(corrupt(
                    chunk.absolute(0),
                    format!("styles start {:#x} outside chunk", styles_start),
                ));
            }
            let region = chunk.view(styles_start, chunk.size() - styles_start)?;
            for offset in style_offsets {
                styles.push(decode_spans(&region, offset as usize)?);
            }
        }

        Ok(Self {
            strings,
            styles,
            flags,
        })
    }

    /// String at `index`, or `None` for the absent sentinel or an
    /// out-of-range index
    pub fn get(&self, index: u32) -> Option<&str> {
        if index == NO_INDEX {
            return None;
        }
        self.strings.get(index as usize).map(String::as_str)
    }

    /// Like [`StringPool::get`] for the signed index fields where `-1`
    /// means absent
    pub fn resolve(&self, index: i32) -> Option<&str> {
        self.get(index as u32)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn is_utf8(&self) -> bool {
        self.flags.contains(StringPoolFlags::UTF8)
    }

    pub fn flags(&self) -> StringPoolFlags {
        self.flags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Style spans attached to the string at `index` (empty when unstyled)
    pub fn styles(&self, index: u32) -> &[StyleSpan] {
        self.styles
            .get(index as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Render the string at `index` with its style spans as html-like tags
    ///
    /// A span name of the form `font;color=#ff0000` opens
    /// `<font color="#ff0000">` and closes `</font>`.
    pub fn get_html(&self, index: u32) -> Option<String> {
        let raw = self.get(index)?;
        let spans = self.styles(index);
        if spans.is_empty() {
            return Some(raw.to_string());
        }

        let mut order: Vec<&StyleSpan> = spans.iter().collect();
        order.sort_by(|a, b| {
            a.first_char
                .cmp(&b.first_char)
                .then(b.last_char.cmp(&a.last_char))
        });

        let units: Vec<u16> = raw.encode_utf16().collect();
        let mut html = String::with_capacity(raw.len() + 32);
        let mut open: Vec<&StyleSpan> = Vec::new();
        let mut next = 0;
        let mut flushed = 0;

        for position in 0..=units.len() {
            while let Some(top) = open.last() {
                if (top.last_char as usize) >= position {
                    break;
                }
                html.push_str(&String::from_utf16_lossy(&units[flushed..position]));
                flushed = position;
                self.push_close_tag(&mut html, top);
                open.pop();
            }
            while next < order.len() && order[next].first_char as usize <= position {
                if position < units.len() {
                    html.push_str(&String::from_utf16_lossy(&units[flushed..position]));
                    flushed = position;
                    self.push_open_tag(&mut html, order[next]);
                    open.push(order[next]);
                }
                next += 1;
            }
        }

        html.push_str(&String::from_utf16_lossy(&units[flushed..]));
        while let Some(span) = open.pop() {
            self.push_close_tag(&mut html, span);
        }
        Some(html)
    }

    fn push_open_tag(&self, html: &mut String, span: &StyleSpan) {
        let name = self.get(span.name).unwrap_or_default();
        let mut parts = name.split(';');
        html.push('<');
        html.push_str(parts.next().unwrap_or_default());
        for attribute in parts {
            match attribute.split_once('=') {
                Some((key, value)) => {
                    html.push_str(&format!(" {}=\"{}\"", key, escape(value)));
                }
                None => {
                    html.push(' ');
                    html.push_str(attribute);
                }
            }
        }
        html.push('>');
    }

    fn push_close_tag(&self, html: &mut String, span: &StyleSpan) {
        let name = self.get(span.name).unwrap_or_default();
        let tag = name.split(';').next().unwrap_or_default();
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
}

fn corrupt(offset: usize, reason: String) -> BinResError {
    BinResError::CorruptStringPool { offset, reason }
}

fn read_offsets(chunk: &mut ByteCursor, count: u32, what: &str) -> Result<Vec<u32>> {
    let count = count as usize;
    if count > chunk.remaining() / 4 {
        return Err(corrupt(
            chunk.absolute_position(),
            format!(
                "{} {} offsets do not fit in {} remaining bytes",
                count,
                what,
                chunk.remaining()
            ),
        ));
    }
    let mut offsets = Vec::with_capacity(count);
    for _ in 0..count {
        offsets.push(chunk.read_u32()?);
    }
    Ok(offsets)
}

fn string_cursor<'a>(region: &ByteCursor<'a>, offset: usize) -> Result<ByteCursor<'a>> {
    region.view(offset, region.size() - offset)
}

fn decode_utf16(region: &ByteCursor, offset: usize) -> Result<String> {
    let mut cursor = string_cursor(region, offset)?;
    let overrun = |cursor: &ByteCursor| {
        corrupt(
            cursor.absolute(0),
            "UTF-16 string runs past the strings region".to_string(),
        )
    };

    let first = cursor.read_u16().map_err(|_| overrun(&cursor))?;
    let length = if first & 0x8000 != 0 {
        let second = cursor.read_u16().map_err(|_| overrun(&cursor))?;
        (((first & 0x7FFF) as usize) << 16) | second as usize
    } else {
        first as usize
    };

    let byte_length = length.checked_mul(2).ok_or_else(|| overrun(&cursor))?;
    let bytes = cursor
        .read_bytes(byte_length)
        .map_err(|_| overrun(&cursor))?;
    let units: Vec<u16> = bytes.chunks_exact(2).map(LittleEndian::read_u16).collect();

    match String::from_utf16(&units) {
        Ok(string) => Ok(string),
        Err(_) => {
            warn!(
                "Invalid UTF-16 string at offset {:#x}, decoding lossily",
                cursor.absolute(0)
            );
            Ok(String::from_utf16_lossy(&units))
        }
    }
}

fn read_utf8_length(cursor: &mut ByteCursor) -> Result<usize> {
    let first = cursor.read_u8()?;
    if first & 0x80 != 0 {
        let second = cursor.read_u8()?;
        Ok((((first & 0x7F) as usize) << 8) | second as usize)
    } else {
        Ok(first as usize)
    }
}

fn decode_utf8(region: &ByteCursor, offset: usize) -> Result<String> {
    let mut cursor = string_cursor(region, offset)?;
    let overrun = |cursor: &ByteCursor| {
        corrupt(
            cursor.absolute(0),
            "UTF-8 string runs past the strings region".to_string(),
        )
    };

    // UTF-16 length first, then the authoritative byte length
    let _char_length = read_utf8_length(&mut cursor).map_err(|_| overrun(&cursor))?;
    let byte_length = read_utf8_length(&mut cursor).map_err(|_| overrun(&cursor))?;
    let bytes = cursor
        .read_bytes(byte_length)
        .map_err(|_| overrun(&cursor))?;

    if let Ok(string) = std::str::from_utf8(bytes) {
        return Ok(string.to_string());
    }
    match cesu8::from_cesu8(bytes) {
        Ok(string) => Ok(string.into_owned()),
        Err(_) => {
            warn!(
                "Invalid UTF-8 string at offset {:#x}, decoding lossily",
                cursor.absolute(0)
            );
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

fn decode_spans(region: &ByteCursor, offset: usize) -> Result<Vec<StyleSpan>> {
    if offset >= region.size() {
        return Err(corrupt(
            region.absolute(0),
            format!("style offset {:#x} outside styles region", offset),
        ));
    }
    let mut cursor = string_cursor(region, offset)?;
    let mut spans = Vec::new();
    loop {
        let name = cursor.read_u32().map_err(|_| {
            corrupt(
                cursor.absolute(0),
                "unterminated style span list".to_string(),
            )
        })?;
        if name == SPAN_END {
            break;
        }
        let first_char = cursor.read_u32()?;
        let last_char = cursor.read_u32()?;
        spans.push(StyleSpan {
            name,
            first_char,
            last_char,
        });
    }
    Ok(spans)
}
