/// Parts of an OPC package.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A loaded package part: partname, content type, raw bytes and the
/// relationships it owns.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: String, blob: Vec<u8>, rels: Relationships) -> Self {
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Partname targeted by relationship `r_id`.
    pub fn target_partname(&self, r_id: &str) -> Result<PackURI> {
        self.rels
            .get(r_id)
            .ok_or_else(|| {
                OpcError::MissingRelationship(format!("{} in {}", r_id, self.partname))
            })?
            .target_partname()
    }
}
