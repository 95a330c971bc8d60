use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::BajaError;

pub type XmlResult = Result<String, BajaError>;

/// Indented UTF-8 XML writer. Output has no trailing newline.
///
/// Leaf values are written inline, so text and CDATA content never pick up
/// indentation whitespace.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, BajaError> {
        let mut w = Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        };
        w.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(w)
    }

    pub fn into_string(self) -> XmlResult {
        String::from_utf8(self.writer.into_inner().into_inner())
            .map_err(|e| BajaError::Xml(format!("rendered bytes are not UTF-8: {e}")))
    }

    fn emit(&mut self, event: Event<'_>) -> Result<&mut Self, BajaError> {
        self.writer
            .write_event(event)
            .map_err(|e| BajaError::Xml(format!("write error: {e}")))?;
        Ok(self)
    }

    fn tag<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
        BytesStart::new(name).with_attributes(attrs.iter().copied())
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, BajaError> {
        self.start_element_with_attrs(name, &[])
    }

    /// Open `name`; attributes are written in the given order.
    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, BajaError> {
        self.emit(Event::Start(Self::tag(name, attrs)))
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, BajaError> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    /// `<name/>`
    pub fn empty_element(&mut self, name: &str) -> Result<&mut Self, BajaError> {
        self.emit(Event::Empty(Self::tag(name, &[])))
    }

    fn leaf(&mut self, name: &str, content: Event<'_>) -> Result<&mut Self, BajaError> {
        self.start_element(name)?.emit(content)?.end_element(name)
    }

    /// `<name>text</name>`, with markup characters escaped.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, BajaError> {
        self.leaf(name, Event::Text(BytesText::new(text)))
    }

    /// Free text wrapped in a CDATA section. Text that would terminate the
    /// section early is written escaped instead.
    pub fn cdata_element(&mut self, name: &str, text: &str) -> Result<&mut Self, BajaError> {
        if text.contains("]]>") {
            return self.text_element(name, text);
        }
        self.leaf(name, Event::CData(BytesCData::new(text)))
    }
}
