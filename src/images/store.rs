//! Where extracted images go.

use super::naming::image_file_name;
use crate::common::Result;
use crate::presentation::ImageData;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Receives picture bytes and returns the name they are stored under.
///
/// The name must depend only on the bytes, MIME type and slide number.
pub trait ImageStore {
    fn persist(&mut self, image: &ImageData, slide_number: usize) -> Result<String>;
}

/// Writes images into a directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    dir: PathBuf,
}

impl FsImageStore {
    /// Use `dir`, creating it (and its parents) if needed.
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageStore for FsImageStore {
    fn persist(&mut self, image: &ImageData, slide_number: usize) -> Result<String> {
        let name = image_file_name(&image.blob, &image.content_type, slide_number);
        let path = self.dir.join(&name);
        if path.is_file() {
            debug!(path = %path.display(), "image already stored");
        } else {
            std::fs::write(&path, &image.blob)?;
        }
        Ok(name)
    }
}

/// Keeps images in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageStore {
    images: BTreeMap<String, ImageData>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ImageData> {
        self.images.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageStore for MemoryImageStore {
    fn persist(&mut self, image: &ImageData, slide_number: usize) -> Result<String> {
        let name = image_file_name(&image.blob, &image.content_type, slide_number);
        self.images.entry(name.clone()).or_insert_with(|| image.clone());
        Ok(name)
    }
}

/// Names images without storing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullImageStore;

impl ImageStore for NullImageStore {
    fn persist(&mut self, image: &ImageData, slide_number: usize) -> Result<String> {
        Ok(image_file_name(&image.blob, &image.content_type, slide_number))
    }
}
