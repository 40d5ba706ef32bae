use crate::chunk::CHUNK_HEADER_SIZE;
use crate::{
    BinResError, ByteCursor, ChunkHeader, NO_INDEX, RES_XML_CDATA_TYPE, RES_XML_END_ELEMENT_TYPE,
    RES_XML_END_NAMESPACE_TYPE, RES_XML_RESOURCE_MAP_TYPE, RES_XML_START_ELEMENT_TYPE,
    RES_XML_START_NAMESPACE_TYPE, RES_XML_TYPE, Result, StringPool, TypedValue,
    attribute_name,
};
use log::{debug, trace};
use quick_xml::escape::escape;

/// Size of the line/comment header shared by every node record
const NODE_HEADER_SIZE: usize = 16;
/// Size of one attribute record as written by aapt
const ATTRIBUTE_RECORD_SIZE: usize = 20;
/// Bytes of a record echoed into an `UnrecognizedTag` error
const DUMP_SIZE: usize = 16;

/// One decoded node of a compact binary XML document
#[derive(Clone, Debug, PartialEq)]
pub enum XmlEvent {
    StartDocument,
    StartTag {
        name: String,
        attributes: Vec<Attribute>,
        source_line: u32,
    },
    EndTag {
        name: String,
        source_line: u32,
    },
    Text {
        value: String,
    },
    EndDocument,
}

/// Attribute of a start tag
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Namespace URI, if the attribute is namespaced
    pub namespace: Option<String>,
    pub name: String,
    /// String pool index of the raw (uncompiled) value
    pub raw_value_index: Option<u32>,
    pub value_type: u8,
    pub raw_value: i32,
    /// Framework or app attribute id from the resource map
    pub resource_id: Option<u32>,
    /// Rendered value: the raw string when there is one, hex data otherwise
    pub value: String,
}

impl Attribute {
    pub fn typed_value(&self) -> TypedValue {
        TypedValue::new(self.value_type, self.raw_value as u32)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineEnding {
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// How the decoder finds the end of a text node
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextNodeHandling {
    /// Scan forward for a `0xFFFFFFFF` marker followed by a zero word and
    /// resume right after the zero word
    #[default]
    SentinelScan,
    /// Trust the declared size of the node
    ChunkSize,
}

/// Options controlling decoding and rendering
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    pub line_ending: LineEnding,
    /// Maximum number of indentation spaces per rendered line
    pub indent_limit: usize,
    pub text_nodes: TextNodeHandling,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::CrLf,
            indent_limit: 45,
            text_nodes: TextNodeHandling::SentinelScan,
        }
    }
}

impl DecodeOptions {
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn indent_limit(mut self, indent_limit: usize) -> Self {
        self.indent_limit = indent_limit;
        self
    }

    pub fn text_nodes(mut self, text_nodes: TextNodeHandling) -> Self {
        self.text_nodes = text_nodes;
        self
    }
}

/// A fully decoded document: its events and their text rendering
#[derive(Clone, Debug, PartialEq)]
pub struct XmlDocument {
    pub events: Vec<XmlEvent>,
    pub xml: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Body,
    Done,
    Failed(usize),
}

/// Pull decoder for compact binary XML
///
/// Each call to [`next_event`](Self::next_event) decodes records until one
/// produces an event, appending its rendering to an internal text buffer.
/// Once `EndDocument` has been returned the decoder stays there; once an
/// error has been returned every further call fails with `DecoderFailed`.
pub struct CompactXmlDecoder<'a> {
    cursor: ByteCursor<'a>,
    options: DecodeOptions,
    strings: StringPool,
    resource_map: Vec<u32>,
    namespaces: Vec<(String, String)>,
    stack: Vec<String>,
    document_started: bool,
    state: State,
    output: String,
}

impl<'a> CompactXmlDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Self::with_options(data, DecodeOptions::default())
    }

    /// Read the document header, string pool and optional resource map
    pub fn with_options(data: &'a [u8], options: DecodeOptions) -> Result<Self> {
        let mut root = ByteCursor::new(data);
        let header = ChunkHeader::read_expecting(&mut root, RES_XML_TYPE)?;
        let mut cursor = header.view(&root)?;
        cursor.seek(header.header_size as usize)?;

        let strings = StringPool::decode(&mut cursor)?;
        let mut resource_map = Vec::new();
        if cursor.remaining() >= CHUNK_HEADER_SIZE
            && (cursor.peek_u32_at(cursor.position())? & 0xFFFF) == RES_XML_RESOURCE_MAP_TYPE as u32
        {
            let map = ChunkHeader::read(&mut cursor)?;
            cursor.seek(map.body_start())?;
            let count = (map.size - map.header_size as u32) / 4;
            for _ in 0..count {
                resource_map.push(cursor.read_u32()?);
            }
            cursor.seek(map.end())?;
        }
        debug!(
            "Binary XML: {} strings, {} resource ids, {} bytes of nodes",
            strings.len(),
            resource_map.len(),
            cursor.remaining()
        );

        let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
        output.push_str(options.line_ending.as_str());

        Ok(Self {
            cursor,
            options,
            strings,
            resource_map,
            namespaces: Vec::new(),
            stack: Vec::new(),
            document_started: false,
            state: State::Body,
            output,
        })
    }

    pub fn string_pool(&self) -> &StringPool {
        &self.strings
    }

    pub fn resource_map(&self) -> &[u32] {
        &self.resource_map
    }

    /// Text rendering of everything decoded so far
    pub fn rendered(&self) -> &str {
        &self.output
    }

    /// Decode the next event
    pub fn next_event(&mut self) -> Result<XmlEvent> {
        match self.state {
            State::Failed(offset) => return Err(BinResError::DecoderFailed { offset }),
            State::Done => return Ok(XmlEvent::EndDocument),
            State::Body => {}
        }
        let result = self.advance();
        if result.is_err() {
            self.state = State::Failed(self.cursor.absolute_position());
        }
        result
    }

    /// Decode every remaining event, consuming the decoder
    pub fn decode(mut self) -> Result<XmlDocument> {
        let mut events = Vec::new();
        loop {
            let event = self.next_event()?;
            let done = event == XmlEvent::EndDocument;
            events.push(event);
            if done {
                break;
            }
        }
        Ok(XmlDocument {
            events,
            xml: self.output,
        })
    }

    fn advance(&mut self) -> Result<XmlEvent> {
        loop {
            if self.cursor.is_at_end() {
                self.check_closed()?;
                return Ok(self.finish());
            }

            let start = self.cursor.position();
            // the tag code decides before any size field is trusted
            let code = self.cursor.peek_u32_at(start)? as u16;
            if !is_node_type(code) {
                return Err(self.unrecognized_tag(start));
            }
            let header = ChunkHeader::read(&mut self.cursor)?;
            if (header.header_size as usize) < NODE_HEADER_SIZE {
                return Err(BinResError::InvalidChunkSize {
                    offset: self.cursor.absolute(start),
                    declared: header.size,
                    reason: format!("node header size {} too small", header.header_size),
                });
            }
            let mut node = header.view(&self.cursor)?;
            node.seek(CHUNK_HEADER_SIZE)?;
            let line = node.read_u32()?;
            node.seek(header.header_size as usize)?;
            trace!(
                "Node {:#06x} at {:#x}, line {}",
                header.ty,
                node.absolute(0),
                line
            );

            let mut resume = header.end();
            let event = match header.ty {
                RES_XML_START_NAMESPACE_TYPE => self.start_namespace(&mut node)?,
                RES_XML_END_NAMESPACE_TYPE => self.end_namespace(&mut node)?,
                RES_XML_START_ELEMENT_TYPE => Some(self.start_element(&mut node, line)?),
                RES_XML_END_ELEMENT_TYPE => Some(self.end_element(&mut node, line)?),
                _ => {
                    if self.options.text_nodes == TextNodeHandling::SentinelScan {
                        resume = self.sentinel_end(start)?;
                    }
                    self.text(&mut node)?
                }
            };
            self.cursor.seek(resume)?;

            if let Some(event) = event {
                return Ok(event);
            }
        }
    }

    fn check_closed(&self) -> Result<()> {
        match self.stack.last() {
            Some(innermost) => Err(BinResError::UnboundedNesting {
                offset: self.cursor.absolute_position(),
                reason: format!(
                    "document ended with {} unclosed tag(s), innermost <{}>",
                    self.stack.len(),
                    innermost
                ),
            }),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> XmlEvent {
        self.state = State::Done;
        XmlEvent::EndDocument
    }

    fn start_namespace(&mut self, node: &mut ByteCursor) -> Result<Option<XmlEvent>> {
        let prefix = self.string_at(node)?.unwrap_or_default();
        let uri = self.string_at(node)?.unwrap_or_default();
        debug!("Namespace {}={}", prefix, uri);
        self.namespaces.push((prefix, uri));

        if self.document_started {
            return Ok(None);
        }
        self.document_started = true;
        Ok(Some(XmlEvent::StartDocument))
    }

    fn end_namespace(&mut self, node: &mut ByteCursor) -> Result<Option<XmlEvent>> {
        if self.namespaces.pop().is_none() {
            return Err(BinResError::UnboundedNesting {
                offset: node.absolute(0),
                reason: "namespace end without a matching start".to_string(),
            });
        }
        if !self.namespaces.is_empty() {
            return Ok(None);
        }
        self.check_closed()?;
        Ok(Some(self.finish()))
    }

    fn start_element(&mut self, node: &mut ByteCursor, line: u32) -> Result<XmlEvent> {
        let ext_start = node.position();
        node.skip(4)?;
        let name = self.required_string(node)?;
        let attribute_start = node.read_u16()? as usize;
        let attribute_size = node.read_u16()? as usize;
        let attribute_count = node.read_u16()? as usize;
        if attribute_count > 0 && attribute_size < ATTRIBUTE_RECORD_SIZE {
            return Err(BinResError::InvalidChunkSize {
                offset: node.absolute(ext_start),
                declared: attribute_size as u32,
                reason: "attribute records smaller than 20 bytes".to_string(),
            });
        }

        let mut attributes = Vec::with_capacity(attribute_count);
        for position in 0..attribute_count {
            node.seek(ext_start + attribute_start + position * attribute_size)?;
            attributes.push(self.attribute(node, position)?);
        }

        let mut line_text = format!("<{}", sanitize(&name));
        for attribute in &attributes {
            let value = sanitize(&attribute.value);
            line_text.push_str(&format!(
                " {}=\"{}\"",
                sanitize(&attribute.name),
                escape(&value)
            ));
        }
        line_text.push('>');
        self.render(&line_text);
        self.stack.push(name.clone());

        Ok(XmlEvent::StartTag {
            name,
            attributes,
            source_line: line,
        })
    }

    fn attribute(&self, node: &mut ByteCursor, position: usize) -> Result<Attribute> {
        let namespace = self.string_at(node)?;
        let name_index = node.read_u32()?;
        let raw_index = node.read_u32()?;
        node.skip(3)?;
        let value_type = node.read_u8()?;
        let raw_value = node.read_i32()?;

        let map_index = if name_index == NO_INDEX {
            position
        } else {
            name_index as usize
        };
        let resource_id = self
            .resource_map
            .get(map_index)
            .copied()
            .filter(|id| *id != 0);
        let name = match self.strings.get(name_index).filter(|s| !s.is_empty()) {
            Some(name) => name.to_string(),
            None => match resource_id {
                Some(id) => match attribute_name(id) {
                    Some(name) => name.to_string(),
                    None => format!("0x{:x}", id),
                },
                None => format!("0x{:x}", name_index),
            },
        };

        let raw_value_index = (raw_index != NO_INDEX).then_some(raw_index);
        let value = match raw_value_index {
            Some(index) => self.pool_string(node, index)?,
            None => format!("0x{:x}", raw_value as u32),
        };

        Ok(Attribute {
            namespace,
            name,
            raw_value_index,
            value_type,
            raw_value,
            resource_id,
            value,
        })
    }

    fn end_element(&mut self, node: &mut ByteCursor, line: u32) -> Result<XmlEvent> {
        node.skip(4)?;
        let name = self.required_string(node)?;
        match self.stack.pop() {
            Some(open) if open == name => {}
            Some(open) => {
                return Err(BinResError::UnboundedNesting {
                    offset: node.absolute(0),
                    reason: format!("</{}> closes <{}>", name, open),
                });
            }
            None => {
                return Err(BinResError::UnboundedNesting {
                    offset: node.absolute(0),
                    reason: format!("</{}> without a matching start tag", name),
                });
            }
        }
        self.render(&format!("</{}>", sanitize(&name)));
        Ok(XmlEvent::EndTag {
            name,
            source_line: line,
        })
    }

    fn text(&mut self, node: &mut ByteCursor) -> Result<Option<XmlEvent>> {
        let index = node.read_u32()?;
        let Some(value) = self.strings.get(index).map(str::to_string) else {
            trace!("Text node at {:#x} has no literal text", node.absolute(0));
            return Ok(None);
        };
        let text = sanitize(&value);
        self.render(&escape(&text));
        Ok(Some(XmlEvent::Text { value }))
    }

    /// Position right after the first zero word that follows a
    /// `0xFFFFFFFF` word, scanning from `start`
    fn sentinel_end(&self, start: usize) -> Result<usize> {
        let mut position = start;
        let mut marker_seen = false;
        loop {
            let word = self.cursor.peek_u32_at(position)?;
            position += 4;
            if !marker_seen {
                marker_seen = word == NO_INDEX;
            } else if word == 0 {
                return Ok(position);
            }
        }
    }

    fn render(&mut self, text: &str) {
        let indent = (self.stack.len() * 2).min(self.options.indent_limit);
        self.output.push_str(&" ".repeat(indent));
        self.output.push_str(text);
        self.output.push_str(self.options.line_ending.as_str());
    }

    /// Read an optional string reference
    fn string_at(&self, node: &mut ByteCursor) -> Result<Option<String>> {
        let index = node.read_u32()?;
        if index == NO_INDEX {
            return Ok(None);
        }
        self.pool_string(node, index).map(Some)
    }

    fn required_string(&self, node: &mut ByteCursor) -> Result<String> {
        let index = node.read_u32()?;
        self.pool_string(node, index)
    }

    fn pool_string(&self, node: &ByteCursor, index: u32) -> Result<String> {
        match self.strings.get(index) {
            Some(s) => Ok(s.to_string()),
            None => Err(BinResError::InvalidStringIndex {
                offset: node.absolute_position(),
                index,
                count: self.strings.len(),
            }),
        }
    }

    fn unrecognized_tag(&self, start: usize) -> BinResError {
        let available = DUMP_SIZE.min(self.cursor.size() - start);
        let header = self
            .cursor
            .view(start, available)
            .and_then(|mut bytes| bytes.read_bytes(available).map(hex::encode))
            .unwrap_or_default();
        BinResError::UnrecognizedTag {
            offset: self.cursor.absolute(start),
            code: self.cursor.peek_u32_at(start).unwrap_or_default(),
            header,
        }
    }
}

impl Iterator for CompactXmlDecoder<'_> {
    type Item = Result<XmlEvent>;

    /// Yields events up to and including `EndDocument` or the first error
    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Body => Some(self.next_event()),
            State::Done | State::Failed(_) => None,
        }
    }
}

/// Decode a whole document with default options
pub fn decode_xml(data: &[u8]) -> Result<XmlDocument> {
    CompactXmlDecoder::new(data)?.decode()
}

fn is_node_type(ty: u16) -> bool {
    matches!(
        ty,
        RES_XML_START_NAMESPACE_TYPE
            | RES_XML_END_NAMESPACE_TYPE
            | RES_XML_START_ELEMENT_TYPE
            | RES_XML_END_ELEMENT_TYPE
            | RES_XML_CDATA_TYPE
    )
}

/// Drop characters that cannot appear in an XML 1.0 document
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| {
            matches!(c, '\t' | '\n' | '\r')
                || (*c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        ANDROID_NS, Attr, AttrValue, XmlBuilder, permission_manifest, string_pool_utf8, table,
    };
    use crate::{TYPE_INT_BOOLEAN, TYPE_INT_DEC, TYPE_REFERENCE, TYPE_STRING};
    use pretty_assertions::assert_eq;
    use quick_xml::{Reader, events::Event};

    fn names(events: &[XmlEvent]) -> Vec<String> {
        events
            .iter()
            .map(|event| match event {
                XmlEvent::StartDocument => "StartDocument".to_string(),
                XmlEvent::StartTag { name, .. } => format!("<{}>", name),
                XmlEvent::EndTag { name, .. } => format!("</{}>", name),
                XmlEvent::Text { value } => format!("'{}'", value),
                XmlEvent::EndDocument => "EndDocument".to_string(),
            })
            .collect()
    }

    fn attributes(event: &XmlEvent) -> &[Attribute] {
        match event {
            XmlEvent::StartTag { attributes, .. } => attributes,
            other => panic!("Expected StartTag, got {:?}", other),
        }
    }

    #[test]
    fn test_permission_manifest() {
        let document = decode_xml(&permission_manifest()).unwrap();
        assert_eq!(
            names(&document.events),
            vec!["<manifest>", "<uses-permission>", "</uses-permission>", "</manifest>", "EndDocument"]
        );

        let package = &attributes(&document.events[0])[0];
        assert_eq!(package.namespace, None);
        assert_eq!(package.name, "package");
        assert_eq!(package.value, "com.example");
        assert_eq!(package.value_type, TYPE_STRING);
        assert!(package.raw_value_index.is_some());
        assert_eq!(package.resource_id, None);

        let permission = &attributes(&document.events[1])[0];
        assert_eq!(permission.name, "name");
        assert_eq!(permission.value, "android.permission.INTERNET");

        assert_eq!(
            document.xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n\
             <manifest package=\"com.example\">\r\n  \
             <uses-permission name=\"android.permission.INTERNET\">\r\n  \
             </uses-permission>\r\n\
             </manifest>\r\n"
        );
    }

    #[test]
    fn test_source_lines() {
        let document = decode_xml(&permission_manifest()).unwrap();
        match (&document.events[1], &document.events[3]) {
            (
                XmlEvent::StartTag { source_line, .. },
                XmlEvent::EndTag {
                    source_line: end_line,
                    ..
                },
            ) => {
                assert_eq!(*source_line, 2);
                assert_eq!(*end_line, 4);
            }
            other => panic!("Unexpected events {:?}", other),
        }
    }

    #[test]
    fn test_end_document_is_terminal() {
        let data = permission_manifest();
        let mut decoder = CompactXmlDecoder::new(&data).unwrap();
        while decoder.next_event().unwrap() != XmlEvent::EndDocument {}
        let rendered = decoder.rendered().to_string();
        for _ in 0..3 {
            assert_eq!(decoder.next_event().unwrap(), XmlEvent::EndDocument);
        }
        assert_eq!(decoder.rendered(), rendered);
    }

    #[test]
    fn test_iterator_stops_after_end_document() {
        let data = permission_manifest();
        let events: Vec<XmlEvent> = CompactXmlDecoder::new(&data)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events.last(), Some(&XmlEvent::EndDocument));
    }

    #[test]
    fn test_namespaces_map_to_document_events() {
        let data = XmlBuilder::new()
            .start_namespace("android", ANDROID_NS)
            .start_element(
                "manifest",
                &[Attr::android("versionCode", AttrValue::Typed(TYPE_INT_DEC, 7))],
            )
            .end_element("manifest")
            .end_namespace("android", ANDROID_NS)
            .build();
        let document = decode_xml(&data).unwrap();
        assert_eq!(
            names(&document.events),
            vec!["StartDocument", "<manifest>", "</manifest>", "EndDocument"]
        );

        let version = &attributes(&document.events[1])[0];
        assert_eq!(version.namespace.as_deref(), Some(ANDROID_NS));
        assert_eq!(version.name, "versionCode");
        assert_eq!(version.raw_value_index, None);
        assert_eq!(version.value, "0x7");
        assert_eq!(version.typed_value().to_string(), "7");
        assert!(document.xml.contains("<manifest versionCode=\"0x7\">"));
    }

    #[test]
    fn test_nested_namespace_is_not_reemitted() {
        let data = XmlBuilder::new()
            .start_namespace("android", ANDROID_NS)
            .start_namespace("tools", "http://schemas.android.com/tools")
            .start_element("manifest", &[])
            .end_element("manifest")
            .end_namespace("tools", "http://schemas.android.com/tools")
            .end_namespace("android", ANDROID_NS)
            .build();
        let document = decode_xml(&data).unwrap();
        assert_eq!(
            names(&document.events),
            vec!["StartDocument", "<manifest>", "</manifest>", "EndDocument"]
        );
    }

    #[test]
    fn test_dangling_end_tag_fails_and_poisons() {
        let data = XmlBuilder::new()
            .start_element("a", &[])
            .end_element("a")
            .end_element("b")
            .build();
        let mut decoder = CompactXmlDecoder::new(&data).unwrap();
        assert!(decoder.next_event().is_ok());
        assert!(decoder.next_event().is_ok());
        match decoder.next_event() {
            Err(BinResError::UnboundedNesting { reason, .. }) => {
                assert!(reason.contains("</b>"), "{}", reason)
            }
            other => panic!("Expected UnboundedNesting, got {:?}", other),
        }
        assert!(matches!(
            decoder.next_event(),
            Err(BinResError::DecoderFailed { .. })
        ));
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_mismatched_end_tag() {
        let data = XmlBuilder::new()
            .start_element("a", &[])
            .end_element("b")
            .build();
        assert!(matches!(
            decode_xml(&data),
            Err(BinResError::UnboundedNesting { .. })
        ));
    }

    #[test]
    fn test_unclosed_tag_at_end_of_document() {
        let data = XmlBuilder::new()
            .start_element("a", &[])
            .start_element("b", &[])
            .end_element("b")
            .build();
        match decode_xml(&data) {
            Err(BinResError::UnboundedNesting { reason, .. }) => {
                assert!(reason.contains("<a>"), "{}", reason)
            }
            other => panic!("Expected UnboundedNesting, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_tag_at_end_namespace() {
        let data = XmlBuilder::new()
            .start_namespace("android", ANDROID_NS)
            .start_element("a", &[])
            .end_namespace("android", ANDROID_NS)
            .build();
        assert!(matches!(
            decode_xml(&data),
            Err(BinResError::UnboundedNesting { .. })
        ));
    }

    #[test]
    fn test_attribute_names_from_resource_map() {
        let mut builder = XmlBuilder::new();
        builder.intern_attribute("", 0x0101_021b);
        let data = builder
            .start_element(
                "manifest",
                &[Attr {
                    namespace: Some(ANDROID_NS),
                    name: Some(""),
                    value: AttrValue::Typed(TYPE_INT_DEC, 12),
                }],
            )
            .end_element("manifest")
            .build();
        let document = decode_xml(&data).unwrap();
        let attribute = &attributes(&document.events[0])[0];
        assert_eq!(attribute.name, "versionCode");
        assert_eq!(attribute.resource_id, Some(0x0101_021b));
        assert!(document.xml.contains("<manifest versionCode=\"0xc\">"));
    }

    #[test]
    fn test_unknown_resource_id_renders_as_hex() {
        let mut builder = XmlBuilder::new();
        builder.intern_attribute("", 0x7f01_0042);
        let data = builder
            .start_element(
                "view",
                &[Attr {
                    namespace: None,
                    name: Some(""),
                    value: AttrValue::Typed(TYPE_INT_BOOLEAN, 1),
                }],
            )
            .end_element("view")
            .build();
        let document = decode_xml(&data).unwrap();
        assert_eq!(attributes(&document.events[0])[0].name, "0x7f010042");
    }

    #[test]
    fn test_absent_attribute_name_uses_position() {
        let data = XmlBuilder::new()
            .resource_ids(&[0x0101_0003])
            .start_element(
                "activity",
                &[Attr {
                    namespace: None,
                    name: None,
                    value: AttrValue::Str(".Main"),
                }],
            )
            .end_element("activity")
            .build();
        let document = decode_xml(&data).unwrap();
        let attribute = &attributes(&document.events[0])[0];
        assert_eq!(attribute.name, "name");
        assert_eq!(attribute.value, ".Main");

        let data = XmlBuilder::new()
            .start_element(
                "activity",
                &[Attr {
                    namespace: None,
                    name: None,
                    value: AttrValue::Typed(TYPE_REFERENCE, 0x7f05_0001),
                }],
            )
            .end_element("activity")
            .build();
        let document = decode_xml(&data).unwrap();
        let attribute = &attributes(&document.events[0])[0];
        assert_eq!(attribute.name, "0xffffffff");
        assert_eq!(attribute.value, "0x7f050001");
        assert_eq!(attribute.typed_value().to_string(), "@0x7f050001");
    }

    #[test]
    fn test_spaced_attribute_records() {
        let data = XmlBuilder::new()
            .start_element_spaced("a", &[Attr::string("x", "1"), Attr::string("y", "2")], 28)
            .end_element("a")
            .build();
        let document = decode_xml(&data).unwrap();
        let attributes = attributes(&document.events[0]);
        assert_eq!(attributes.len(), 2);
        assert_eq!((attributes[1].name.as_str(), attributes[1].value.as_str()), ("y", "2"));
        assert!(document.xml.contains("<a x=\"1\" y=\"2\">"));
    }

    fn text_document() -> Vec<u8> {
        XmlBuilder::new()
            .start_element("label", &[])
            .text("fish & chips")
            .end_element("label")
            .build()
    }

    #[test]
    fn test_text_nodes_with_sentinel_scan() {
        let document = decode_xml(&text_document()).unwrap();
        assert_eq!(
            names(&document.events),
            vec!["<label>", "'fish & chips'", "</label>", "EndDocument"]
        );
        assert!(document.xml.contains("\r\n  fish &amp; chips\r\n</label>"));
    }

    #[test]
    fn test_text_nodes_with_chunk_size() {
        let data = text_document();
        let options = DecodeOptions::default().text_nodes(TextNodeHandling::ChunkSize);
        let document = CompactXmlDecoder::with_options(&data, options)
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(
            names(&document.events),
            vec!["<label>", "'fish & chips'", "</label>", "EndDocument"]
        );
    }

    #[test]
    fn test_sentinel_scan_runs_out_of_input() {
        let mut text = Vec::new();
        for word in [0x0010_0104u32, 28, 1, NO_INDEX, 5, 8, 7] {
            text.extend_from_slice(&word.to_le_bytes());
        }
        let data = XmlBuilder::new().raw(&text).build();

        assert!(matches!(
            decode_xml(&data),
            Err(BinResError::TruncatedInput { .. })
        ));

        let options = DecodeOptions::default().text_nodes(TextNodeHandling::ChunkSize);
        let document = CompactXmlDecoder::with_options(&data, options)
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(document.events, vec![XmlEvent::EndDocument]);
    }

    #[test]
    fn test_unrecognized_tag() {
        let mut node = Vec::new();
        for word in [0x0010_0105u32, 16, 1, NO_INDEX] {
            node.extend_from_slice(&word.to_le_bytes());
        }
        let data = XmlBuilder::new().raw(&node).build();
        match decode_xml(&data) {
            Err(BinResError::UnrecognizedTag { code, header, .. }) => {
                assert_eq!(code, 0x0010_0105);
                assert_eq!(header, hex::encode(&node));
            }
            other => panic!("Expected UnrecognizedTag, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_tag_with_zero_header_size() {
        let mut node = Vec::new();
        for word in [0x0000_0042u32, 0, 0, 0] {
            node.extend_from_slice(&word.to_le_bytes());
        }
        let data = XmlBuilder::new().raw(&node).build();
        match decode_xml(&data) {
            Err(BinResError::UnrecognizedTag { code, .. }) => assert_eq!(code, 0x42),
            other => panic!("Expected UnrecognizedTag, got {:?}", other),
        }
    }

    #[test]
    fn test_string_typed_attribute_without_raw_value() {
        let data = XmlBuilder::new()
            .start_element("a", &[Attr {
                namespace: None,
                name: Some("x"),
                value: AttrValue::Typed(TYPE_STRING, 99),
            }])
            .end_element("a")
            .build();
        let document = decode_xml(&data).unwrap();
        let x = &attributes(&document.events[0])[0];
        assert_eq!(x.raw_value_index, None);
        assert_eq!(x.value, "0x63");
        assert!(document.xml.contains("<a x=\"0x63\">"));
    }

    #[test]
    fn test_not_an_xml_document() {
        let data = table(&[], &[]);
        assert!(matches!(
            CompactXmlDecoder::new(&data),
            Err(BinResError::UnexpectedChunkType { .. })
        ));
        let pool = string_pool_utf8(&["a"]);
        assert!(CompactXmlDecoder::new(&pool).is_err());
    }

    #[test]
    fn test_line_ending_and_indent_limit() {
        let data = XmlBuilder::new()
            .start_element("a", &[])
            .start_element("b", &[])
            .start_element("c", &[])
            .end_element("c")
            .end_element("b")
            .end_element("a")
            .build();
        let options = DecodeOptions::default()
            .line_ending(LineEnding::Lf)
            .indent_limit(2);
        let document = CompactXmlDecoder::with_options(&data, options)
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(
            document.xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n  <b>\n  <c>\n  </c>\n  </b>\n</a>\n"
        );
    }

    #[test]
    fn test_rendering_is_well_formed() {
        let data = XmlBuilder::new()
            .start_namespace("android", ANDROID_NS)
            .start_element(
                "manifest",
                &[
                    Attr::string("package", "com.example\u{1}<&>\"quoted\""),
                    Attr::android("versionCode", AttrValue::Typed(TYPE_INT_DEC, 3)),
                ],
            )
            .start_element("application", &[Attr::string("label", "Fish & 'Chips'")])
            .text("a < b")
            .end_element("application")
            .end_element("manifest")
            .end_namespace("android", ANDROID_NS)
            .build();
        let document = decode_xml(&data).unwrap();

        let mut reader = Reader::from_str(&document.xml);
        let mut starts = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(start) => {
                    starts.push(String::from_utf8(start.name().as_ref().to_vec()).unwrap())
                }
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(starts, vec!["manifest", "application"]);
        assert!(!document.xml.contains('\u{1}'));
    }
}
