//! Errors raised while reading the PresentationML layer.
use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Container-level failure
    #[error(transparent)]
    Opc(#[from] OpcError),

    /// A part's XML is not well-formed
    #[error("malformed XML: {0}")]
    Xml(String),

    /// A part the deck needs is absent
    #[error("missing part: {0}")]
    MissingPart(String),

    #[error("unexpected content type {got} (wanted {expected})")]
    WrongContentType { expected: String, got: String },

    /// A relationship points at nothing usable
    #[error("dangling relationship: {0}")]
    DanglingRelationship(String),

    /// Well-formed XML with the wrong structure
    #[error("malformed part: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OoxmlError>;
