//! Read-only loading of a serialized OPC package.
//!
//! Parses the content types stream, then walks the relationship graph from
//! the package relationships and loads every reachable internal part.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};
use tracing::warn;

/// Content type lookup built from `[Content_Types].xml`.
///
/// Overrides are keyed by partname, defaults by lower-cased extension.
#[derive(Debug, Default)]
pub(crate) struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    pub(crate) fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(ref e) | Event::Start(ref e) => {
                    let is_default = match e.local_name().as_ref() {
                        b"Default" => true,
                        b"Override" => false,
                        _ => {
                            buf.clear();
                            continue;
                        },
                    };

                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => {
                                key = Some(attr.unescape_value()?.into_owned())
                            },
                            b"ContentType" => {
                                content_type = Some(attr.unescape_value()?.into_owned())
                            },
                            _ => {},
                        }
                    }

                    if let (Some(key), Some(ct)) = (key, content_type) {
                        if is_default {
                            map.defaults.insert(key.to_lowercase(), ct);
                        } else {
                            map.overrides.insert(key, ct);
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    pub(crate) fn get(&self, pack_uri: &PackURI) -> Result<&str> {
        self.overrides
            .get(pack_uri.as_str())
            .or_else(|| self.defaults.get(&pack_uri.ext().to_lowercase()))
            .map(String::as_str)
            .ok_or_else(|| OpcError::NoContentType(pack_uri.to_string()))
    }
}

/// Package relationships plus every reachable part.
pub struct PackageReader {
    pkg_rels: Relationships,
    parts: Vec<Part>,
}

impl PackageReader {
    pub fn from_phys_reader<R: Read + Seek>(phys: &mut PhysPkgReader<R>) -> Result<Self> {
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::BadPartName)?;
        let content_types = ContentTypeMap::from_xml(&phys.blob_for(&content_types_uri)?)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::BadPartName)?;
        let pkg_rels = Self::load_rels(phys, &package_uri)?;

        let mut parts = Vec::new();
        let mut visited = HashSet::new();
        let mut work_queue: Vec<PackURI> = Vec::new();
        Self::enqueue_targets(&pkg_rels, &mut visited, &mut work_queue);

        while let Some(partname) = work_queue.pop() {
            let Some(blob) = phys.read_member(partname.membername())? else {
                warn!(part = %partname, "relationship target missing from package");
                continue;
            };
            let content_type = match content_types.get(&partname) {
                Ok(ct) => ct.to_string(),
                Err(e) => {
                    warn!(part = %partname, error = %e, "skipping part without content type");
                    continue;
                },
            };

            let rels = Self::load_rels(phys, &partname)?;
            Self::enqueue_targets(&rels, &mut visited, &mut work_queue);
            parts.push(Part::new(partname, content_type, blob, rels));
        }

        Ok(Self { pkg_rels, parts })
    }

    fn load_rels<R: Read + Seek>(
        phys: &mut PhysPkgReader<R>,
        source_uri: &PackURI,
    ) -> Result<Relationships> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::BadPartName)?;
        match phys.read_member(rels_uri.membername())? {
            Some(xml) => Relationships::from_xml(&xml, source_uri.base_uri()),
            None => Ok(Relationships::new()),
        }
    }

    fn enqueue_targets(
        rels: &Relationships,
        visited: &mut HashSet<PackURI>,
        work_queue: &mut Vec<PackURI>,
    ) {
        for rel in rels.iter().filter(|rel| !rel.is_external()) {
            if let Ok(partname) = rel.target_partname()
                && visited.insert(partname.clone())
            {
                work_queue.push(partname);
            }
        }
    }

    /// Split into package relationships and loaded parts.
    pub fn into_parts(self) -> (Relationships, Vec<Part>) {
        (self.pkg_rels, self.parts)
    }
}
