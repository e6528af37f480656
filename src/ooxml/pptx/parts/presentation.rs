/// Presentation part, `/ppt/presentation.xml`.
use crate::ooxml::drawings::parse_i64;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::Part;
use quick_xml::Reader;
use quick_xml::events::Event;

/// The main presentation part.
///
/// Holds the ordered slide list (`p:sldIdLst`) and the slide size.
pub struct PresentationPart<'a> {
    part: &'a Part,
}

impl<'a> PresentationPart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }

    /// Relationship IDs of the slides in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut rids = Vec::new();
        let mut buf = Vec::new();
        let mut in_list = false;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) if e.local_name().as_ref() == b"sldIdLst" => in_list = true,
                Event::End(ref e) if e.local_name().as_ref() == b"sldIdLst" => in_list = false,
                Event::Start(ref e) | Event::Empty(ref e)
                    if in_list && e.local_name().as_ref() == b"sldId" =>
                {
                    for attr in e.attributes() {
                        let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        if attr.key.local_name().as_ref() == b"id" && attr.key.prefix().is_some() {
                            rids.push(attr.unescape_value()?.into_owned());
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rids)
    }

    /// Slide width and height in EMUs from `p:sldSz`.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sldSz" => {
                    let mut cx = None;
                    let mut cy = None;
                    for attr in e.attributes().flatten() {
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        match attr.key.as_ref() {
                            b"cx" => cx = parse_i64(value),
                            b"cy" => cy = parse_i64(value),
                            _ => {},
                        }
                    }
                    return Ok(cx.zip(cy));
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }
}
