//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        Error::from_opc_error(err)
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::MissingPart(s) => Error::ComponentNotFound(s),
            OoxmlError::WrongContentType { expected, got } => {
                Error::InvalidContentType { expected, got }
            },
            OoxmlError::DanglingRelationship(s) => Error::ComponentNotFound(s),
            OoxmlError::Malformed(s) => Error::InvalidFormat(s),
            OoxmlError::Opc(e) => Error::from_opc_error(e),
        }
    }
}

impl Error {
    pub(crate) fn from_opc_error(err: OpcError) -> Self {
        match err {
            OpcError::Io(e) => Error::Io(e),
            OpcError::Zip(e) => Error::ZipError(e.to_string()),
            OpcError::Xml(s) => Error::XmlError(s),
            OpcError::MissingPart(s) => Error::ComponentNotFound(s),
            _ => Error::Other(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opc_part_not_found_maps_to_component() {
        let err: Error = OpcError::MissingPart("/ppt/slides/slide9.xml".to_string()).into();
        assert!(matches!(err, Error::ComponentNotFound(ref s) if s.contains("slide9")));
    }

    #[test]
    fn test_ooxml_wrapping_opc_is_flattened() {
        let err: Error = OoxmlError::Opc(OpcError::Xml("bad".to_string())).into();
        assert!(matches!(err, Error::XmlError(ref s) if s == "bad"));
    }

    #[test]
    fn test_load_failure_classification() {
        assert!(Error::load("deck.pptx", "broken zip").is_load_failure());
        assert!(Error::FileNotFound("x.pptx".into()).is_load_failure());
        assert!(!Error::Other("nope".to_string()).is_load_failure());
    }
}
