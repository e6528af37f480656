//! Unified error type for deckscan operations.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deckscan operations.
///
/// Only load-time problems and output I/O surface as `Error`. Malformed
/// properties on individual shapes degrade to missing fields instead.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input document does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input document exists but could not be loaded
    #[error("Failed to load {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Part or relationship not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV input
    #[error("CSV error at line {line}: {message}")]
    Csv { line: usize, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an error raised while opening a document into a load failure
    /// that names the offending path.
    pub fn load(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Load {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether this error was raised while loading the input document.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Error::FileNotFound(_) | Error::Load { .. })
    }
}

/// Result type for deckscan operations.
pub type Result<T> = std::result::Result<T, Error>;
