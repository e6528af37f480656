/// Relationships between parts of an OPC package.
use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
    base_uri: String,
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: impl Into<String>,
        reltype: impl Into<String>,
        target_ref: impl Into<String>,
        base_uri: impl Into<String>,
        is_external: bool,
    ) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.into(),
            target_ref: target_ref.into(),
            base_uri: base_uri.into(),
            is_external,
        }
    }

    /// Relationship ID, e.g. `rId2`.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Relationship type URI.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Raw target reference as written in the `.rels` part.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Absolute partname of the target. Fails for external targets.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::BadRelationship(format!(
                "{} targets external resource {}",
                self.r_id, self.target_ref
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::BadPartName)
    }
}

/// The relationships owned by one source part (or by the package).
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: SmallVec<[Relationship; 8]>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `.rels` part. `base_uri` is the directory of the source part.
    pub fn from_xml(xml: &[u8], base_uri: &str) -> Result<Self> {
        let mut rels = Self::new();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(ref e) | Event::Start(ref e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = attr.unescape_value()?;
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value.into_owned()),
                            b"Type" => reltype = Some(value.into_owned()),
                            b"Target" => target_ref = Some(value.into_owned()),
                            b"TargetMode" => external = value == target_mode::EXTERNAL,
                            _ => {},
                        }
                    }

                    if let (Some(id), Some(rt), Some(tr)) = (r_id, reltype, target_ref) {
                        rels.push(Relationship::new(id, rt, tr, base_uri, external));
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    pub fn push(&mut self, rel: Relationship) {
        self.rels.push(rel);
    }

    /// Look up a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// First relationship of the given type.
    pub fn by_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}
