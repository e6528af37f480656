//! Externally supplied tags.
//!
//! A JSON object mapping `"document"` and `"slide_<n>"` keys to lists of
//! tag strings:
//!
//! ```json
//! { "document": ["q3-review"], "slide_2": ["pricing"] }
//! ```

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DOCUMENT_KEY: &str = "document";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomTags(HashMap<String, Vec<String>>);

impl CustomTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Tags for the whole document.
    pub fn document(&self) -> &[String] {
        self.0.get(DOCUMENT_KEY).map(Vec::as_slice).unwrap_or_default()
    }

    /// Tags for slide `slide_number` (1-based).
    pub fn for_slide(&self, slide_number: usize) -> &[String] {
        self.0
            .get(&format!("slide_{}", slide_number))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn insert(&mut self, key: impl Into<String>, tags: Vec<String>) {
        self.0.insert(key.into(), tags);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup() {
        let mut tags = CustomTags::new();
        assert!(tags.document().is_empty());
        tags.insert("slide_3", vec!["pricing".to_string()]);
        assert_eq!(tags.for_slide(3), ["pricing"]);
        assert!(tags.for_slide(30).is_empty());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"document": ["a", "b"]}}"#).unwrap();
        let tags = CustomTags::load(file.path()).unwrap();
        assert_eq!(tags.document(), ["a", "b"]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            CustomTags::from_json_str(r#"{"document": "not-a-list"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            CustomTags::load("/nonexistent/tags.json"),
            Err(Error::FileNotFound(_))
        ));
    }
}
