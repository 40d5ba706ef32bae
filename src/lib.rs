//! A library for decoding Android's compiled binary resources.
//!
//! Two formats are supported, both built from the same nested chunk framing:
//!
//! * compact binary XML (`AndroidManifest.xml` and compiled layouts), decoded
//!   into a stream of [`XmlEvent`]s and an indented text rendering;
//! * the resource table (`resources.arsc`), decoded into a [`ResourceIndex`]
//!   mapping resource IDs to their configuration-qualified values.
//!
//! # Examples
//!
//! ```no_run
//! use binres::{AxmlToXmlConverter, ResourceTable};
//!
//! // Convert a compiled manifest to text XML
//! AxmlToXmlConverter::default()
//!     .convert_file("AndroidManifest.xml", "manifest.xml")
//!     .unwrap();
//!
//! // Look up a string resource
//! let data = std::fs::read("resources.arsc").unwrap();
//! let table = ResourceTable::decode(&data).unwrap();
//! for value in table.index().get_str("0x7f050001") {
//!     println!("{}", value.value);
//! }
//! ```

use std::io;
use thiserror::Error;

mod attr_names;
mod binary_xml;
mod byte_cursor;
mod chunk;
pub mod cli;
mod converter;
mod res_config;
mod resource_table;
mod string_pool;
mod typed_value;

#[cfg(test)]
mod fixtures;

pub use attr_names::attribute_name;
pub use binary_xml::{
    Attribute, CompactXmlDecoder, DecodeOptions, LineEnding, TextNodeHandling, XmlDocument,
    XmlEvent, decode_xml,
};
pub use byte_cursor::ByteCursor;
pub use chunk::ChunkHeader;
pub use converter::{AxmlToXmlConverter, ResourceTableDumper};
pub use res_config::Configuration;
pub use resource_table::{
    EntryFlags, EntryValue, IndexedValue, Package, ResourceEntry, ResourceId, ResourceIndex,
    ResourceTable, ResourceValue, TypeSpec,
};
pub use string_pool::{StringPool, StringPoolFlags, StyleSpan};
pub use typed_value::{DataType, TypedValue};

/// Error types for binary XML and resource table decoding
///
/// Every decoding error carries the absolute byte offset at which it was
/// detected.
#[derive(Error, Debug)]
pub enum BinResError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Truncated input at offset {offset:#x}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("Invalid offset {target:#x} at offset {offset:#x} (buffer size {size})")]
    InvalidOffset {
        offset: usize,
        target: usize,
        size: usize,
    },
    #[error("Unexpected chunk type at offset {offset:#x}. Expected: {expected:#06x}, got: {actual:#06x}")]
    UnexpectedChunkType {
        offset: usize,
        expected: u16,
        actual: u16,
    },
    #[error("Unsupported chunk type {chunk_type:#06x} at offset {offset:#x}")]
    UnsupportedChunkType { offset: usize, chunk_type: u16 },
    #[error("Invalid chunk size {declared} at offset {offset:#x}: {reason}")]
    InvalidChunkSize {
        offset: usize,
        declared: u32,
        reason: String,
    },
    #[error("Corrupt string pool at offset {offset:#x}: {reason}")]
    CorruptStringPool { offset: usize, reason: String },
    #[error("Invalid string index {index} at offset {offset:#x} (pool holds {count} strings)")]
    InvalidStringIndex {
        offset: usize,
        index: u32,
        count: usize,
    },
    #[error(
        "Invalid type chunk layout at offset {offset:#x}: header size {header_size} + {entries_count} entries does not match entries start {entries_start}"
    )]
    InvalidTypeChunkLayout {
        offset: usize,
        header_size: u16,
        entries_count: u32,
        entries_start: u32,
    },
    #[error(
        "Invalid package header at offset {offset:#x}: type strings start {type_strings} does not follow header size {header_size}"
    )]
    InvalidPackageHeader {
        offset: usize,
        type_strings: u32,
        header_size: u16,
    },
    #[error("Unrecognized tag code {code:#010x} at offset {offset:#x} (header bytes: {header})")]
    UnrecognizedTag {
        offset: usize,
        code: u32,
        header: String,
    },
    #[error("Multiple global string pools, second one at offset {offset:#x}")]
    MultipleStringPools { offset: usize },
    #[error("Package count mismatch: header declares {declared}, found {found}")]
    PackageCountMismatch { declared: u32, found: u32 },
    #[error("Unbalanced tag nesting at offset {offset:#x}: {reason}")]
    UnboundedNesting { offset: usize, reason: String },
    #[error("Decoder already failed at offset {offset:#x}")]
    DecoderFailed { offset: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, BinResError>;

// Chunk types
pub const RES_NULL_TYPE: u16 = 0x0000;
pub const RES_STRING_POOL_TYPE: u16 = 0x0001;
pub const RES_TABLE_TYPE: u16 = 0x0002;
pub const RES_XML_TYPE: u16 = 0x0003;
pub const RES_XML_START_NAMESPACE_TYPE: u16 = 0x0100;
pub const RES_XML_END_NAMESPACE_TYPE: u16 = 0x0101;
pub const RES_XML_START_ELEMENT_TYPE: u16 = 0x0102;
pub const RES_XML_END_ELEMENT_TYPE: u16 = 0x0103;
pub const RES_XML_CDATA_TYPE: u16 = 0x0104;
pub const RES_XML_RESOURCE_MAP_TYPE: u16 = 0x0180;
pub const RES_TABLE_PACKAGE_TYPE: u16 = 0x0200;
pub const RES_TABLE_TYPE_TYPE: u16 = 0x0201;
pub const RES_TABLE_TYPE_SPEC_TYPE: u16 = 0x0202;
pub const RES_TABLE_LIBRARY_TYPE: u16 = 0x0203;

// Value types
pub const TYPE_NULL: u8 = 0x00;
pub const TYPE_REFERENCE: u8 = 0x01;
pub const TYPE_ATTRIBUTE: u8 = 0x02;
pub const TYPE_STRING: u8 = 0x03;
pub const TYPE_FLOAT: u8 = 0x04;
pub const TYPE_DIMENSION: u8 = 0x05;
pub const TYPE_FRACTION: u8 = 0x06;
pub const TYPE_DYNAMIC_REFERENCE: u8 = 0x07;
pub const TYPE_DYNAMIC_ATTRIBUTE: u8 = 0x08;
pub const TYPE_INT_DEC: u8 = 0x10;
pub const TYPE_INT_HEX: u8 = 0x11;
pub const TYPE_INT_BOOLEAN: u8 = 0x12;
pub const TYPE_INT_COLOR_ARGB8: u8 = 0x1c;
pub const TYPE_INT_COLOR_RGB8: u8 = 0x1d;
pub const TYPE_INT_COLOR_ARGB4: u8 = 0x1e;
pub const TYPE_INT_COLOR_RGB4: u8 = 0x1f;

/// Sentinel used by every index field to mean "absent"
pub const NO_INDEX: u32 = 0xFFFF_FFFF;
