//! Physical access to the ZIP container behind an OPC package.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Reads member blobs out of a ZIP-based package.
pub struct PhysPkgReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl PhysPkgReader<BufReader<File>> {
    /// Open a package file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::NotAPackage(path.display().to_string()));
        }
        Self::new(BufReader::new(File::open(path)?))
    }
}

impl<R: Read + Seek> PhysPkgReader<R> {
    /// Wrap a reader positioned anywhere in a ZIP archive.
    pub fn new(reader: R) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Read the member stored under `pack_uri`.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        self.read_member(pack_uri.membername())?
            .ok_or_else(|| OpcError::MissingPart(pack_uri.to_string()))
    }

    /// Read a member by ZIP name. `Ok(None)` when the member is absent.
    pub fn read_member(&mut self, membername: &str) -> Result<Option<Vec<u8>>> {
        let mut file = match self.archive.by_name(membername) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(Some(blob))
    }

    /// Whether the archive holds a member with this name.
    pub fn contains(&self, membername: &str) -> bool {
        self.archive.index_for_name(membername).is_some()
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}
