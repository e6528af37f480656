//! Presentation root.

use super::Slide;
use crate::common::{Error, Metadata, Result};
use crate::ooxml::pptx::Package;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::info;

/// A loaded slide deck.
///
/// Use `Presentation::open()` to read a `.pptx` file, or build one directly
/// when the slides come from somewhere else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    /// Slides in `p:sldIdLst` order
    pub slides: Vec<Slide>,
    /// Core document properties
    pub properties: Metadata,
    /// File name of the source document, if it came from disk
    pub file_name: Option<String>,
    /// Size of the source document in bytes
    pub file_size: u64,
}

impl Presentation {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            ..Default::default()
        }
    }

    /// Open a `.pptx` or `.pptm` file.
    ///
    /// A missing file is `Error::FileNotFound`; anything else that stops the
    /// package from loading is `Error::Load`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use deckscan::Presentation;
    ///
    /// let pres = Presentation::open("deck.pptx")?;
    /// println!("{} slides", pres.slide_count());
    /// # Ok::<(), deckscan::common::Error>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let file_size = std::fs::metadata(path)?.len();
        let mut pres = Package::open(path)
            .and_then(|package| package.load())
            .map_err(|e| Error::load(path, e))?;
        pres.file_name = path.file_name().map(|name| name.to_string_lossy().into_owned());
        pres.file_size = file_size;

        info!(path = %path.display(), slides = pres.slides.len(), "loaded presentation");
        Ok(pres)
    }

    /// Load a presentation from an in-memory or streamed package.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Package::from_reader(reader)
            .and_then(|package| package.load())
            .map_err(Error::from)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
