use crate::errors::{AppError, AppResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use std::fmt::Display;

const INDENT_SIZE: usize = 2;

/// Content held by an [`Element`].
#[derive(Debug, Clone, PartialEq)]
enum Content {
    Empty,
    Text(String),
    Children(Vec<Element>),
}

/// A node of the XML tree handed to the serializer.
///
/// Element and attribute names are fixed by the sitemap schema, hence `&'static str`;
/// attribute values and text are owned and escaped on write.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    content: Content,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: Content::Empty,
        }
    }

    /// Creates an element that is always written with start and end tags, even
    /// when it ends up with no children.
    pub fn container(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: Content::Children(Vec::new()),
        }
    }

    /// Creates an element holding a single text node.
    pub fn with_text(name: &'static str, text: impl Into<String>) -> Self {
        Self::new(name).text(text)
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Element::child)
    }

    /// Serializes the element as a standalone document with an XML declaration.
    pub fn to_document(&self) -> AppResult<String> {
        let mut writer = Writer::new_with_indent(Vec::with_capacity(8 * 1024), b' ', INDENT_SIZE);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        self.write_to(&mut writer)?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(String::from_utf8(bytes)?)
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> AppResult<()> {
        let mut start = BytesStart::new(self.name);
        for (key, value) in &self.attributes {
            start.push_attribute((*key, value.as_str()));
        }

        match &self.content {
            Content::Empty => {
                writer.write_event(Event::Empty(start)).map_err(xml_error)?;
            }
            Content::Text(text) => {
                writer.write_event(Event::Start(start)).map_err(xml_error)?;
                writer
                    .write_event(Event::Text(BytesText::new(text)))
                    .map_err(xml_error)?;
                writer
                    .write_event(Event::End(BytesEnd::new(self.name)))
                    .map_err(xml_error)?;
            }
            Content::Children(children) => {
                writer.write_event(Event::Start(start)).map_err(xml_error)?;
                for child in children {
                    child.write_to(writer)?;
                }
                writer
                    .write_event(Event::End(BytesEnd::new(self.name)))
                    .map_err(xml_error)?;
            }
        }
        Ok(())
    }
}

fn xml_error(err: impl Display) -> AppError {
    AppError::Xml(format!("Failed to write XML event: {err}"))
}
