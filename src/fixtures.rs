//! Builders for binary test inputs.

use crate::{
    RES_STRING_POOL_TYPE, RES_TABLE_PACKAGE_TYPE, RES_TABLE_TYPE, RES_TABLE_TYPE_SPEC_TYPE,
    RES_TABLE_TYPE_TYPE, RES_XML_CDATA_TYPE, RES_XML_END_ELEMENT_TYPE,
    RES_XML_END_NAMESPACE_TYPE, RES_XML_RESOURCE_MAP_TYPE, RES_XML_START_ELEMENT_TYPE,
    RES_XML_START_NAMESPACE_TYPE, RES_XML_TYPE, StyleSpan, TYPE_NULL, TYPE_STRING,
};

const NONE: u32 = 0xFFFF_FFFF;

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn pad4(out: &mut Vec<u8>) {
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

fn chunk(ty: u16, header: &[u8], body: &[u8]) -> Vec<u8> {
    let header_size = 8 + header.len();
    let mut out = Vec::new();
    push_u16(&mut out, ty);
    push_u16(&mut out, header_size as u16);
    push_u32(&mut out, (header_size + body.len()) as u32);
    out.extend_from_slice(header);
    out.extend_from_slice(body);
    out
}

fn utf8_length(out: &mut Vec<u8>, length: usize) {
    if length < 0x80 {
        out.push(length as u8);
    } else {
        out.push((((length >> 8) & 0x7F) | 0x80) as u8);
        out.push((length & 0xFF) as u8);
    }
}

fn utf16_length(out: &mut Vec<u8>, length: usize) {
    if length < 0x8000 {
        push_u16(out, length as u16);
    } else {
        push_u16(out, (((length >> 16) & 0x7FFF) | 0x8000) as u16);
        push_u16(out, (length & 0xFFFF) as u16);
    }
}

fn string_pool_chunk(
    offsets: &[u32],
    mut data: Vec<u8>,
    flags: u32,
    style_offsets: &[u32],
    style_data: &[u8],
) -> Vec<u8> {
    pad4(&mut data);
    let header_size = 28u32;
    let strings_start = header_size + 4 * (offsets.len() + style_offsets.len()) as u32;
    let styles_start = if style_offsets.is_empty() {
        0
    } else {
        strings_start + data.len() as u32
    };

    let mut header = Vec::new();
    push_u32(&mut header, offsets.len() as u32);
    push_u32(&mut header, style_offsets.len() as u32);
    push_u32(&mut header, flags);
    push_u32(&mut header, strings_start);
    push_u32(&mut header, styles_start);

    let mut body = Vec::new();
    for offset in offsets.iter().chain(style_offsets) {
        push_u32(&mut body, *offset);
    }
    body.extend_from_slice(&data);
    body.extend_from_slice(style_data);
    chunk(RES_STRING_POOL_TYPE, &header, &body)
}

/// UTF-8 pool with explicit (utf16 length, payload) pairs
pub(crate) fn string_pool_utf8_raw(entries: &[(usize, &[u8])]) -> Vec<u8> {
    let mut offsets = Vec::new();
    let mut data = Vec::new();
    for (char_length, bytes) in entries {
        offsets.push(data.len() as u32);
        utf8_length(&mut data, *char_length);
        utf8_length(&mut data, bytes.len());
        data.extend_from_slice(bytes);
        data.push(0);
    }
    string_pool_chunk(&offsets, data, 1 << 8, &[], &[])
}

pub(crate) fn string_pool_utf8(strings: &[&str]) -> Vec<u8> {
    let entries: Vec<(usize, &[u8])> = strings
        .iter()
        .map(|s| (s.encode_utf16().count(), s.as_bytes()))
        .collect();
    string_pool_utf8_raw(&entries)
}

fn utf16_data(strings: &[&str]) -> (Vec<u32>, Vec<u8>) {
    let mut offsets = Vec::new();
    let mut data = Vec::new();
    for s in strings {
        offsets.push(data.len() as u32);
        let units: Vec<u16> = s.encode_utf16().collect();
        utf16_length(&mut data, units.len());
        for unit in units {
            push_u16(&mut data, unit);
        }
        push_u16(&mut data, 0);
    }
    (offsets, data)
}

pub(crate) fn string_pool_utf16(strings: &[&str]) -> Vec<u8> {
    let (offsets, data) = utf16_data(strings);
    string_pool_chunk(&offsets, data, 0, &[], &[])
}

/// UTF-16 pool where the first `styles.len()` strings carry style spans
pub(crate) fn string_pool_with_styles(strings: &[&str], styles: &[Vec<StyleSpan>]) -> Vec<u8> {
    let (offsets, data) = utf16_data(strings);
    let mut style_offsets = Vec::new();
    let mut style_data = Vec::new();
    for spans in styles {
        style_offsets.push(style_data.len() as u32);
        for span in spans {
            push_u32(&mut style_data, span.name);
            push_u32(&mut style_data, span.first_char);
            push_u32(&mut style_data, span.last_char);
        }
        push_u32(&mut style_data, NONE);
    }
    push_u32(&mut style_data, NONE);
    push_u32(&mut style_data, NONE);
    string_pool_chunk(&offsets, data, 0, &style_offsets, &style_data)
}

/// Attribute value for [`XmlBuilder::start_element`]
pub(crate) enum AttrValue<'a> {
    Str(&'a str),
    Typed(u8, u32),
}

/// Attribute for [`XmlBuilder::start_element`]; a `None` name is written as
/// the absent index and only resolvable through the resource map
pub(crate) struct Attr<'a> {
    pub namespace: Option<&'a str>,
    pub name: Option<&'a str>,
    pub value: AttrValue<'a>,
}

impl<'a> Attr<'a> {
    pub fn string(name: &'a str, value: &'a str) -> Self {
        Self {
            namespace: None,
            name: Some(name),
            value: AttrValue::Str(value),
        }
    }

    pub fn android(name: &'a str, value: AttrValue<'a>) -> Self {
        Self {
            namespace: Some(ANDROID_NS),
            name: Some(name),
            value,
        }
    }
}

pub(crate) const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Incremental builder for compact binary XML documents
#[derive(Default)]
pub(crate) struct XmlBuilder {
    strings: Vec<String>,
    resource_ids: Vec<u32>,
    body: Vec<u8>,
    line: u32,
}

impl XmlBuilder {
    pub fn new() -> Self {
        Self {
            line: 1,
            ..Default::default()
        }
    }

    pub fn intern(&mut self, s: &str) -> u32 {
        match self.strings.iter().position(|existing| existing == s) {
            Some(index) => index as u32,
            None => {
                self.strings.push(s.to_string());
                (self.strings.len() - 1) as u32
            }
        }
    }

    /// Intern `s` at the same index as a resource-map entry
    pub fn intern_attribute(&mut self, s: &str, resource_id: u32) -> u32 {
        let index = self.intern(s);
        while self.resource_ids.len() <= index as usize {
            self.resource_ids.push(0);
        }
        self.resource_ids[index as usize] = resource_id;
        index
    }

    pub fn resource_ids(&mut self, ids: &[u32]) -> &mut Self {
        self.resource_ids = ids.to_vec();
        self
    }

    fn node(&mut self, ty: u16, ext: &[u8]) {
        let mut header = Vec::new();
        push_u32(&mut header, self.line);
        push_u32(&mut header, NONE);
        self.body.extend_from_slice(&chunk(ty, &header, ext));
        self.line += 1;
    }

    fn index_of(&mut self, s: Option<&str>) -> u32 {
        match s {
            Some(s) => self.intern(s),
            None => NONE,
        }
    }

    pub fn start_namespace(&mut self, prefix: &str, uri: &str) -> &mut Self {
        let mut ext = Vec::new();
        let prefix = self.intern(prefix);
        let uri = self.intern(uri);
        push_u32(&mut ext, prefix);
        push_u32(&mut ext, uri);
        self.node(RES_XML_START_NAMESPACE_TYPE, &ext);
        self
    }

    pub fn end_namespace(&mut self, prefix: &str, uri: &str) -> &mut Self {
        let mut ext = Vec::new();
        let prefix = self.intern(prefix);
        let uri = self.intern(uri);
        push_u32(&mut ext, prefix);
        push_u32(&mut ext, uri);
        self.node(RES_XML_END_NAMESPACE_TYPE, &ext);
        self
    }

    pub fn start_element(&mut self, name: &str, attrs: &[Attr]) -> &mut Self {
        self.start_element_spaced(name, attrs, 20)
    }

    /// Start element whose attribute records are `attribute_size` bytes apart
    pub fn start_element_spaced(
        &mut self,
        name: &str,
        attrs: &[Attr],
        attribute_size: u16,
    ) -> &mut Self {
        let mut ext = Vec::new();
        let name = self.intern(name);
        push_u32(&mut ext, NONE);
        push_u32(&mut ext, name);
        push_u16(&mut ext, 20);
        push_u16(&mut ext, attribute_size);
        push_u16(&mut ext, attrs.len() as u16);
        push_u16(&mut ext, 0);
        push_u16(&mut ext, 0);
        push_u16(&mut ext, 0);
        for attr in attrs {
            let namespace = self.index_of(attr.namespace);
            let attr_name = self.index_of(attr.name);
            push_u32(&mut ext, namespace);
            push_u32(&mut ext, attr_name);
            match attr.value {
                AttrValue::Str(value) => {
                    let value = self.intern(value);
                    push_u32(&mut ext, value);
                    push_u16(&mut ext, 8);
                    ext.push(0);
                    ext.push(TYPE_STRING);
                    push_u32(&mut ext, value);
                }
                AttrValue::Typed(data_type, data) => {
                    push_u32(&mut ext, NONE);
                    push_u16(&mut ext, 8);
                    ext.push(0);
                    ext.push(data_type);
                    push_u32(&mut ext, data);
                }
            }
            ext.resize(ext.len() + attribute_size as usize - 20, 0);
        }
        self.node(RES_XML_START_ELEMENT_TYPE, &ext);
        self
    }

    pub fn end_element(&mut self, name: &str) -> &mut Self {
        let mut ext = Vec::new();
        let name = self.intern(name);
        push_u32(&mut ext, NONE);
        push_u32(&mut ext, name);
        self.node(RES_XML_END_ELEMENT_TYPE, &ext);
        self
    }

    /// Text node in the layout aapt writes: data index plus a null typed value
    pub fn text(&mut self, text: &str) -> &mut Self {
        let mut ext = Vec::new();
        let index = self.intern(text);
        push_u32(&mut ext, index);
        push_u16(&mut ext, 8);
        ext.push(0);
        ext.push(TYPE_NULL);
        push_u32(&mut ext, 0);
        self.node(RES_XML_CDATA_TYPE, &ext);
        self
    }

    /// Append raw bytes to the node stream
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let strings: Vec<&str> = self.strings.iter().map(String::as_str).collect();
        let mut body = string_pool_utf16(&strings);
        if !self.resource_ids.is_empty() {
            let mut ids = Vec::new();
            for id in &self.resource_ids {
                push_u32(&mut ids, *id);
            }
            body.extend_from_slice(&chunk(RES_XML_RESOURCE_MAP_TYPE, &[], &ids));
        }
        body.extend_from_slice(&self.body);
        chunk(RES_XML_TYPE, &[], &body)
    }
}

/// `<manifest package="com.example"><uses-permission name="..."/></manifest>`
pub(crate) fn permission_manifest() -> Vec<u8> {
    XmlBuilder::new()
        .start_element("manifest", &[Attr::string("package", "com.example")])
        .start_element(
            "uses-permission",
            &[Attr::string("name", "android.permission.INTERNET")],
        )
        .end_element("uses-permission")
        .end_element("manifest")
        .build()
}

pub(crate) fn simple_entry(key: u32, data_type: u8, data: u32) -> Vec<u8> {
    let mut out = Vec::new();
    push_u16(&mut out, 8);
    push_u16(&mut out, 0);
    push_u32(&mut out, key);
    push_u16(&mut out, 8);
    out.push(0);
    out.push(data_type);
    push_u32(&mut out, data);
    out
}

pub(crate) fn complex_entry(key: u32, parent: u32, map: &[(u32, u8, u32)]) -> Vec<u8> {
    let mut out = Vec::new();
    push_u16(&mut out, 16);
    push_u16(&mut out, 0x0001);
    push_u32(&mut out, key);
    push_u32(&mut out, parent);
    push_u32(&mut out, map.len() as u32);
    for (name, data_type, data) in map {
        push_u32(&mut out, *name);
        push_u16(&mut out, 8);
        out.push(0);
        out.push(*data_type);
        push_u32(&mut out, *data);
    }
    out
}

/// Configuration descriptor of `size` bytes with the given fields set
pub(crate) struct ConfigBytes {
    pub size: u32,
    pub language: [u8; 2],
    pub country: [u8; 2],
    pub density: u16,
    pub sdk_version: u16,
}

impl ConfigBytes {
    pub fn default_config() -> Self {
        Self {
            size: 64,
            language: [0; 2],
            country: [0; 2],
            density: 0,
            sdk_version: 0,
        }
    }

    pub fn density(density: u16) -> Self {
        Self {
            density,
            ..Self::default_config()
        }
    }

    pub fn locale(language: &str, country: &str) -> Self {
        let mut config = Self::default_config();
        config.language.copy_from_slice(&language.as_bytes()[..2]);
        if !country.is_empty() {
            config.country.copy_from_slice(&country.as_bytes()[..2]);
        }
        config
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        push_u32(&mut out, self.size);
        push_u32(&mut out, 0);
        out.extend_from_slice(&self.language);
        out.extend_from_slice(&self.country);
        out.push(0);
        out.push(0);
        push_u16(&mut out, self.density);
        push_u32(&mut out, 0);
        push_u32(&mut out, 0);
        push_u16(&mut out, self.sdk_version);
        push_u16(&mut out, 0);
        out.resize(self.size as usize, 0);
        out
    }
}

/// Type chunk with dense 32-bit entry offsets; `None` entries are absent
pub(crate) fn type_chunk(type_id: u8, config: &[u8], entries: &[Option<Vec<u8>>]) -> Vec<u8> {
    let header_size = 20 + config.len();
    let entries_start = header_size + 4 * entries.len();

    let mut header = Vec::new();
    header.push(type_id);
    header.push(0);
    push_u16(&mut header, 0);
    push_u32(&mut header, entries.len() as u32);
    push_u32(&mut header, entries_start as u32);
    header.extend_from_slice(config);

    let mut offsets = Vec::new();
    let mut data = Vec::new();
    for entry in entries {
        match entry {
            Some(bytes) => {
                push_u32(&mut offsets, data.len() as u32);
                data.extend_from_slice(bytes);
            }
            None => push_u32(&mut offsets, NONE),
        }
    }
    offsets.extend_from_slice(&data);
    chunk(RES_TABLE_TYPE_TYPE, &header, &offsets)
}

pub(crate) fn type_spec_chunk(type_id: u8, entry_count: u32) -> Vec<u8> {
    let mut header = Vec::new();
    header.push(type_id);
    header.push(0);
    push_u16(&mut header, 0);
    push_u32(&mut header, entry_count);
    let mut body = Vec::new();
    for _ in 0..entry_count {
        push_u32(&mut body, 0x0000_0100);
    }
    chunk(RES_TABLE_TYPE_SPEC_TYPE, &header, &body)
}

pub(crate) fn package_chunk(
    id: u32,
    name: &str,
    type_names: &[&str],
    key_names: &[&str],
    chunks: &[Vec<u8>],
) -> Vec<u8> {
    let type_pool = string_pool_utf8(type_names);
    let key_pool = string_pool_utf8(key_names);
    let header_size = 288u32;

    let mut header = Vec::new();
    push_u32(&mut header, id);
    let mut name_units: Vec<u16> = name.encode_utf16().collect();
    name_units.resize(128, 0);
    for unit in name_units {
        push_u16(&mut header, unit);
    }
    push_u32(&mut header, header_size);
    push_u32(&mut header, type_names.len() as u32);
    push_u32(&mut header, header_size + type_pool.len() as u32);
    push_u32(&mut header, key_names.len() as u32);
    push_u32(&mut header, 0);

    let mut body = type_pool;
    body.extend_from_slice(&key_pool);
    for chunk in chunks {
        body.extend_from_slice(chunk);
    }
    chunk(RES_TABLE_PACKAGE_TYPE, &header, &body)
}

pub(crate) fn table_with_count(
    value_strings: &[&str],
    packages: &[Vec<u8>],
    package_count: u32,
) -> Vec<u8> {
    let mut header = Vec::new();
    push_u32(&mut header, package_count);
    let mut body = string_pool_utf8(value_strings);
    for package in packages {
        body.extend_from_slice(package);
    }
    chunk(RES_TABLE_TYPE, &header, &body)
}

pub(crate) fn table(value_strings: &[&str], packages: &[Vec<u8>]) -> Vec<u8> {
    table_with_count(value_strings, packages, packages.len() as u32)
}
