//! Owned XML element tree for slide parts.
//!
//! Slide and notes parts are small, and shape trees nest arbitrarily, so
//! they are read into a tree once and then queried by local name instead of
//! being driven through a streaming state machine.

use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

/// One XML element with its attributes, direct text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name as written, e.g. `p:sp`
    name: String,
    /// Attributes as (qualified key, unescaped value)
    attributes: Vec<(String, String)>,
    /// Concatenated character data directly inside this element
    text: String,
    children: Vec<Element>,
}

/// Strip a namespace prefix: `a:off` becomes `off`.
#[inline]
fn local_part(qname: &str) -> &str {
    qname.rsplit(':').next().unwrap_or(qname)
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a complete XML document and return its root element.
    pub fn parse(xml: &[u8]) -> Result<Element> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => stack.push(Self::from_start(e)?),
                Event::Empty(ref e) => {
                    let element = Self::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| OoxmlError::Xml("unbalanced end tag".to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(t.as_ref()).map_err(|e| {
                            OoxmlError::Xml(format!("Invalid UTF-8 in text content: {}", e))
                        })?;
                        current.text.push_str(text);
                    }
                },
                Event::CData(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(t.as_ref()));
                    }
                },
                Event::GeneralRef(ref r) => {
                    if let Some(current) = stack.last_mut() {
                        if let Some(ch) = r.resolve_char_ref()? {
                            current.text.push(ch);
                        } else {
                            let name = String::from_utf8_lossy(r.as_ref());
                            match resolve_predefined_entity(&name) {
                                Some(value) => current.text.push_str(value),
                                None => {
                                    return Err(OoxmlError::Xml(format!(
                                        "unknown entity &{};",
                                        name
                                    )));
                                },
                            }
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Err(OoxmlError::Xml("no root element found".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Element> {
        let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()));
        for attr in e.attributes() {
            let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    /// Qualified name, e.g. `p:sp`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without namespace prefix, e.g. `sp`.
    #[inline]
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    #[inline]
    pub fn is(&self, local: &str) -> bool {
        self.local_name() == local
    }

    /// Attribute value by local name (`embed` matches `r:embed`).
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| local_part(key) == local)
            .map(|(_, value)| value.as_str())
    }

    /// Character data directly inside this element.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given local name.
    pub fn child(&self, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(local))
    }

    /// All children with the given local name.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(local))
    }

    /// Follow a chain of child local names.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |element, local| element.child(local))
    }

    /// First element with the given local name anywhere below this one,
    /// depth-first in document order.
    pub fn descendant(&self, local: &str) -> Option<&Element> {
        self.children
            .iter()
            .find_map(|c| if c.is(local) { Some(c) } else { c.descendant(local) })
    }

    /// Consume this element and keep its first child with the given local name.
    pub fn into_child(self, local: &str) -> Option<Element> {
        self.children.into_iter().find(|c| c.is(local))
    }
}
