/// In-memory OPC package.
///
/// Holds the package relationships and every part reachable from them,
/// indexed by partname.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;

pub struct OpcPackage {
    rels: Relationships,
    parts: HashMap<PackURI, Part>,
}

impl OpcPackage {
    /// Open an OPC package from a file.
    ///
    /// # Example
    /// ```no_run
    /// use deckscan::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("deck.pptx").unwrap();
    /// println!("{} parts", pkg.part_count());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut phys = PhysPkgReader::open(path)?;
        Self::from_phys_reader(&mut phys)
    }

    /// Load an OPC package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut phys = PhysPkgReader::new(reader)?;
        Self::from_phys_reader(&mut phys)
    }

    fn from_phys_reader<R: Read + Seek>(phys: &mut PhysPkgReader<R>) -> Result<Self> {
        let (rels, parts) = PackageReader::from_phys_reader(phys)?.into_parts();
        let parts = parts
            .into_iter()
            .map(|part| (part.partname().clone(), part))
            .collect();
        Ok(Self { rels, parts })
    }

    /// Package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.get(partname)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Part targeted by the first package relationship of `reltype`.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&Part> {
        let rel = self
            .rels
            .by_type(reltype)
            .ok_or_else(|| OpcError::MissingRelationship(reltype.to_string()))?;
        let partname = rel.target_partname()?;
        self.parts
            .get(&partname)
            .ok_or_else(|| OpcError::MissingPart(partname.to_string()))
    }

    /// The main document part (`/ppt/presentation.xml` for a deck).
    pub fn main_document_part(&self) -> Result<&Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    /// Follow relationship `r_id` of `source` to its target part.
    pub fn related_part(&self, source: &Part, r_id: &str) -> Result<&Part> {
        let partname = source.target_partname(r_id)?;
        self.parts
            .get(&partname)
            .ok_or_else(|| OpcError::MissingPart(partname.to_string()))
    }

    /// Target of the first relationship of `reltype` owned by `source`.
    pub fn related_part_by_type(&self, source: &Part, reltype: &str) -> Option<&Part> {
        let rel = source.rels().by_type(reltype)?;
        let partname = rel.target_partname().ok()?;
        self.parts.get(&partname)
    }
}
