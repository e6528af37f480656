//! Errors raised by the OPC container layer.
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    /// The file is not a readable ZIP package
    #[error("not an OPC package: {0}")]
    NotAPackage(String),

    #[error("bad part name: {0}")]
    BadPartName(String),

    #[error("no such part: {0}")]
    MissingPart(String),

    #[error("no such relationship: {0}")]
    MissingRelationship(String),

    /// Neither an override nor a default covers the part
    #[error("no content type for {0}")]
    NoContentType(String),

    #[error("bad relationship: {0}")]
    BadRelationship(String),

    #[error("malformed package XML: {0}")]
    Xml(String),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bad attribute: {0}")]
    Attr(String),
}

impl From<quick_xml::Error> for OpcError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<AttrError> for OpcError {
    fn from(err: AttrError) -> Self {
        Self::Attr(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
