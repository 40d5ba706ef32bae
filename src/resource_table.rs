use crate::{
    BinResError, ByteCursor, ChunkHeader, Configuration, NO_INDEX, RES_STRING_POOL_TYPE,
    RES_TABLE_LIBRARY_TYPE, RES_TABLE_PACKAGE_TYPE, RES_TABLE_TYPE, RES_TABLE_TYPE_SPEC_TYPE,
    RES_TABLE_TYPE_TYPE, Result, StringPool, TYPE_REFERENCE, TypedValue,
};
use bitflags::bitflags;
use log::{debug, trace, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Package headers this size or larger carry a `typeIdOffset` field
const PACKAGE_HEADER_WITH_TYPE_ID_OFFSET: u16 = 288;
const PACKAGE_NAME_SIZE: usize = 256;
const NO_OFFSET16: u16 = 0xFFFF;

bitflags! {
    /// Flags of a resource entry
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EntryFlags: u16 {
        /// Entry is a bag of (name, value) pairs
        const COMPLEX = 0x0001;
        const PUBLIC = 0x0002;
        const WEAK = 0x0004;
        /// Key and value type are packed into the entry header
        const COMPACT = 0x0008;
    }
}

bitflags! {
    /// Flags of a type chunk
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct TypeFlags: u8 {
        /// Entry offsets are (index, offset / 4) pairs
        const SPARSE = 0x01;
        /// Entry offsets are 16-bit, in units of 4 bytes
        const OFFSET16 = 0x02;
    }
}

/// Resource identifier, `package << 24 | type << 16 | entry`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub fn new(package_id: u8, type_id: u8, entry_index: u16) -> Self {
        Self(((package_id as u32) << 24) | ((type_id as u32) << 16) | entry_index as u32)
    }

    pub fn package_id(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn type_id(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn entry_index(&self) -> u16 {
        self.0 as u16
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = BinResError;

    /// Accepts `0x7f050001`, `0X7F050001` or bare `7f050001`
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u32::from_str_radix(digits, 16)
            .map(ResourceId)
            .map_err(|e| BinResError::InvalidArgument(format!("invalid resource id {:?}: {}", s, e)))
    }
}

/// A resolved value in the resource index
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceValue {
    String(String),
    Typed(TypedValue),
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceValue::String(s) => write!(f, "{}", s),
            ResourceValue::Typed(value) => write!(f, "{}", value),
        }
    }
}

/// A value together with the configuration it applies to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedValue {
    pub config: Configuration,
    pub value: ResourceValue,
}

/// Resource id to values, each list in the order the values were declared
#[derive(Clone, Debug, Default)]
pub struct ResourceIndex {
    values: BTreeMap<ResourceId, Vec<IndexedValue>>,
}

impl ResourceIndex {
    /// Values of `id`, empty when the id is unknown
    pub fn get(&self, id: impl Into<ResourceId>) -> &[IndexedValue] {
        self.values
            .get(&id.into())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Values of an id given in hex form, empty when unknown or malformed
    pub fn get_str(&self, id: &str) -> &[IndexedValue] {
        match id.parse::<ResourceId>() {
            Ok(id) => self.get(id),
            Err(_) => &[],
        }
    }

    pub fn contains(&self, id: impl Into<ResourceId>) -> bool {
        self.values.contains_key(&id.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ids in ascending order with their values
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &[IndexedValue])> {
        self.values.iter().map(|(id, values)| (*id, values.as_slice()))
    }

    fn push(&mut self, id: ResourceId, value: IndexedValue) {
        self.values.entry(id).or_default().push(value);
    }
}

/// Raw value of an entry as stored in its type chunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryValue {
    Simple(TypedValue),
    Reference(ResourceId),
    Complex {
        parent: Option<ResourceId>,
        map: Vec<(u32, TypedValue)>,
    },
}

/// One entry of one type chunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceEntry {
    pub id: ResourceId,
    pub type_name: String,
    pub key: String,
    pub flags: EntryFlags,
    pub config: Configuration,
    pub value: EntryValue,
}

/// Per-entry configuration masks of one type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSpec {
    pub id: u8,
    pub name: String,
    pub flags: Vec<u32>,
}

#[derive(Clone, Debug)]
pub struct Package {
    pub id: u32,
    pub name: String,
    pub type_strings: StringPool,
    pub key_strings: StringPool,
    pub type_specs: Vec<TypeSpec>,
}

/// Decoded `resources.arsc`
#[derive(Clone, Debug, Default)]
pub struct ResourceTable {
    value_strings: StringPool,
    packages: Vec<Package>,
    entries: Vec<ResourceEntry>,
    index: ResourceIndex,
}

impl ResourceTable {
    /// Decode a whole resource table
    ///
    /// A declared table size that differs from the input length rejects the
    /// table before any package is read, as a `PackageCountMismatch` with
    /// nothing found.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(data);
        let header = ChunkHeader::read_expecting(&mut cursor, RES_TABLE_TYPE)?;
        let package_count = cursor.read_u32()?;
        if header.size as usize != data.len() {
            warn!(
                "Table declares {} bytes but the input holds {}",
                header.size,
                data.len()
            );
            return Err(BinResError::PackageCountMismatch {
                declared: package_count,
                found: 0,
            });
        }
        cursor.seek(header.header_size as usize)?;

        let mut table = ResourceTable::default();
        let mut value_pool_seen = false;
        while !cursor.is_at_end() {
            let start = cursor.position();
            let chunk = ChunkHeader::read(&mut cursor)?;
            cursor.seek(start)?;
            match chunk.ty {
                RES_STRING_POOL_TYPE => {
                    if value_pool_seen {
                        return Err(BinResError::MultipleStringPools { offset: start });
                    }
                    table.value_strings = StringPool::decode(&mut cursor)?;
                    value_pool_seen = true;
                    debug!("Value string pool: {} strings", table.value_strings.len());
                }
                RES_TABLE_PACKAGE_TYPE => {
                    if !value_pool_seen {
                        warn!("Package at {:#x} precedes the value string pool", start);
                    }
                    let view = chunk.view(&cursor)?;
                    let package = table.decode_package(view)?;
                    table.packages.push(package);
                    cursor.seek(chunk.end())?;
                }
                chunk_type => {
                    return Err(BinResError::UnsupportedChunkType {
                        offset: start,
                        chunk_type,
                    });
                }
            }
        }

        if !value_pool_seen {
            warn!("Resource table has no value string pool");
        }
        if table.packages.len() != package_count as usize {
            return Err(BinResError::PackageCountMismatch {
                declared: package_count,
                found: table.packages.len() as u32,
            });
        }
        Ok(table)
    }

    pub fn value_strings(&self) -> &StringPool {
        &self.value_strings
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Every decoded entry, in stream order
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn index(&self) -> &ResourceIndex {
        &self.index
    }

    /// Id of the resource named `type/key`, e.g. `string/app_name`
    pub fn find(&self, name: &str) -> Option<ResourceId> {
        let (type_name, key) = name.split_once('/')?;
        self.entries
            .iter()
            .find(|entry| entry.type_name == type_name && entry.key == key)
            .map(|entry| entry.id)
    }

    fn decode_package(&mut self, mut chunk: ByteCursor) -> Result<Package> {
        let header = ChunkHeader::read_expecting(&mut chunk, RES_TABLE_PACKAGE_TYPE)?;
        let id = chunk.read_u32()?;
        let name = utf16_name(chunk.read_bytes(PACKAGE_NAME_SIZE)?);
        let type_strings = chunk.read_u32()?;
        let _last_public_type = chunk.read_u32()?;
        let key_strings = chunk.read_u32()?;
        let _last_public_key = chunk.read_u32()?;
        let type_id_offset = if header.header_size >= PACKAGE_HEADER_WITH_TYPE_ID_OFFSET {
            chunk.read_u32()?
        } else {
            0
        };
        if type_strings != header.header_size as u32 {
            return Err(BinResError::InvalidPackageHeader {
                offset: chunk.absolute(0),
                type_strings,
                header_size: header.header_size,
            });
        }
        debug!("Package {:#04x} {:?} at {:#x}", id, name, chunk.absolute(0));

        chunk.seek(type_strings as usize)?;
        let type_pool = StringPool::decode(&mut chunk)?;
        chunk.seek(key_strings as usize)?;
        let key_pool = StringPool::decode(&mut chunk)?;

        let mut package = Package {
            id,
            name,
            type_strings: type_pool,
            key_strings: key_pool,
            type_specs: Vec::new(),
        };
        while !chunk.is_at_end() {
            let start = chunk.position();
            let sub = ChunkHeader::read(&mut chunk)?;
            let view = sub.view(&chunk)?;
            match sub.ty {
                RES_TABLE_TYPE_SPEC_TYPE => {
                    let spec = decode_type_spec(view, &package, type_id_offset)?;
                    package.type_specs.push(spec);
                }
                RES_TABLE_TYPE_TYPE => self.decode_type(view, &package, type_id_offset)?,
                RES_TABLE_LIBRARY_TYPE => {
                    debug!("Skipping library chunk at {:#x}", chunk.absolute(start))
                }
                other => debug!(
                    "Skipping unknown chunk {:#06x} at {:#x}",
                    other,
                    chunk.absolute(start)
                ),
            }
            chunk.seek(sub.end())?;
        }
        Ok(package)
    }

    fn decode_type(
        &mut self,
        mut chunk: ByteCursor,
        package: &Package,
        type_id_offset: u32,
    ) -> Result<()> {
        let header = ChunkHeader::read(&mut chunk)?;
        let type_id = chunk.read_u8()?;
        let flags = TypeFlags::from_bits_retain(chunk.read_u8()?);
        chunk.skip(2)?;
        let entry_count = chunk.read_u32()?;
        let entries_start = chunk.read_u32()?;
        let config = Configuration::decode(&mut chunk)?;

        let stride = if flags.contains(TypeFlags::OFFSET16) && !flags.contains(TypeFlags::SPARSE) {
            2
        } else {
            4
        };
        if header.header_size as u64 + entry_count as u64 * stride != entries_start as u64 {
            return Err(BinResError::InvalidTypeChunkLayout {
                offset: chunk.absolute(0),
                header_size: header.header_size,
                entries_count: entry_count,
                entries_start,
            });
        }
        let type_name = type_name(package, type_id, type_id_offset, &chunk)?;
        trace!(
            "Type {} ({}) config {}: {} entries",
            type_id, type_name, config, entry_count
        );

        chunk.seek(header.header_size as usize)?;
        let mut offsets = Vec::with_capacity(entry_count as usize);
        for position in 0..entry_count {
            if flags.contains(TypeFlags::SPARSE) {
                let index = chunk.read_u16()?;
                let offset = chunk.read_u16()? as u32 * 4;
                offsets.push((index, offset));
            } else if flags.contains(TypeFlags::OFFSET16) {
                let offset = chunk.read_u16()?;
                if offset != NO_OFFSET16 {
                    offsets.push((position as u16, offset as u32 * 4));
                }
            } else {
                let offset = chunk.read_u32()?;
                if offset != NO_INDEX {
                    offsets.push((position as u16, offset));
                }
            }
        }

        for (entry_index, offset) in offsets {
            let id = ResourceId::new(package.id as u8, type_id, entry_index);
            let position = (entries_start as usize)
                .checked_add(offset as usize)
                .unwrap_or(usize::MAX);
            chunk.seek(position)?;
            let (key, entry_flags, value) = decode_entry(&mut chunk)?;
            let key = match package.key_strings.get(key) {
                Some(key) => key.to_string(),
                None => {
                    return Err(BinResError::InvalidStringIndex {
                        offset: chunk.absolute(position),
                        index: key,
                        count: package.key_strings.len(),
                    });
                }
            };
            trace!("Entry {} {}/{}: {:?}", id, type_name, key, value);

            self.index_value(id, &config, &value, &chunk, position)?;
            self.entries.push(ResourceEntry {
                id,
                type_name: type_name.clone(),
                key,
                flags: entry_flags,
                config: config.clone(),
                value,
            });
        }
        Ok(())
    }

    /// Record the resolved form of a simple value; references copy the
    /// values already recorded for their target
    fn index_value(
        &mut self,
        id: ResourceId,
        config: &Configuration,
        value: &EntryValue,
        chunk: &ByteCursor,
        position: usize,
    ) -> Result<()> {
        match value {
            EntryValue::Simple(value) if value.is_string() => {
                let Some(s) = self.value_strings.get(value.data) else {
                    return Err(BinResError::InvalidStringIndex {
                        offset: chunk.absolute(position),
                        index: value.data,
                        count: self.value_strings.len(),
                    });
                };
                let value = IndexedValue {
                    config: config.clone(),
                    value: ResourceValue::String(s.to_string()),
                };
                self.index.push(id, value);
            }
            EntryValue::Simple(value) => {
                let value = IndexedValue {
                    config: config.clone(),
                    value: ResourceValue::Typed(*value),
                };
                self.index.push(id, value);
            }
            EntryValue::Reference(target) if *target == id => {
                warn!("Resource {} references itself", id);
            }
            EntryValue::Reference(target) => {
                let resolved = self.index.get(*target).to_vec();
                if resolved.is_empty() {
                    debug!("Resource {} references {} before it is defined", id, target);
                }
                for value in resolved {
                    self.index.push(id, value);
                }
            }
            EntryValue::Complex { .. } => {}
        }
        Ok(())
    }
}

fn decode_type_spec(
    mut chunk: ByteCursor,
    package: &Package,
    type_id_offset: u32,
) -> Result<TypeSpec> {
    let header = ChunkHeader::read(&mut chunk)?;
    let id = chunk.read_u8()?;
    chunk.skip(3)?;
    let entry_count = chunk.read_u32()?;
    chunk.seek(header.header_size as usize)?;
    let mut flags = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        flags.push(chunk.read_u32()?);
    }
    Ok(TypeSpec {
        id,
        name: type_name(package, id, type_id_offset, &chunk)?,
        flags,
    })
}

/// Decode the entry at the cursor: key index, flags and value
fn decode_entry(chunk: &mut ByteCursor) -> Result<(u32, EntryFlags, EntryValue)> {
    let start = chunk.position();
    let size = chunk.read_u16()?;
    let raw_flags = chunk.read_u16()?;
    let flags = EntryFlags::from_bits_retain(raw_flags & 0x00FF);

    if flags.contains(EntryFlags::COMPACT) {
        let data_type = (raw_flags >> 8) as u8;
        let data = chunk.read_u32()?;
        return Ok((size as u32, flags, simple_value(TypedValue::new(data_type, data))));
    }

    let key = chunk.read_u32()?;
    if flags.contains(EntryFlags::COMPLEX) {
        let parent = chunk.read_u32()?;
        let count = chunk.read_u32()?;
        chunk.seek(start + size as usize)?;
        let mut map = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            let name = chunk.read_u32()?;
            map.push((name, read_value(chunk)?));
        }
        let parent = (parent != 0).then_some(ResourceId(parent));
        return Ok((key, flags, EntryValue::Complex { parent, map }));
    }

    chunk.seek(start + size as usize)?;
    let value = read_value(chunk)?;
    Ok((key, flags, simple_value(value)))
}

fn simple_value(value: TypedValue) -> EntryValue {
    match value.data_type {
        TYPE_REFERENCE => EntryValue::Reference(ResourceId(value.data)),
        _ => EntryValue::Simple(value),
    }
}

/// Read a `Res_value`: size, reserved byte, type, data
fn read_value(chunk: &mut ByteCursor) -> Result<TypedValue> {
    chunk.skip(3)?;
    let data_type = chunk.read_u8()?;
    let data = chunk.read_u32()?;
    Ok(TypedValue::new(data_type, data))
}

fn type_name(
    package: &Package,
    type_id: u8,
    type_id_offset: u32,
    chunk: &ByteCursor,
) -> Result<String> {
    let index = (type_id as u32)
        .checked_sub(1 + type_id_offset)
        .unwrap_or(NO_INDEX);
    match package.type_strings.get(index) {
        Some(name) => Ok(name.to_string()),
        None => Err(BinResError::InvalidStringIndex {
            offset: chunk.absolute(0),
            index,
            count: package.type_strings.len(),
        }),
    }
}

/// NUL-terminated UTF-16 package name
fn utf16_name(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|unit| *unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}
