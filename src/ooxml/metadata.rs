/// Core properties (`docProps/core.xml`) of an OOXML package.
///
/// The part follows Dublin Core plus the OPC `cp:` extensions. Elements are
/// matched by local name so any prefix binding works.
use crate::common::Metadata;
use crate::ooxml::element::Element;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Extract core properties from a package.
///
/// A package without a core properties part yields empty metadata.
pub fn extract_metadata(package: &OpcPackage) -> Result<Metadata> {
    match package.part_by_reltype(relationship_type::CORE_PROPERTIES) {
        Ok(part) => parse_core_properties_xml(part.blob()),
        Err(_) => Ok(Metadata::default()),
    }
}

/// Parse the XML of a core properties part.
pub fn parse_core_properties_xml(xml: &[u8]) -> Result<Metadata> {
    let root = Element::parse(xml)?;
    let mut metadata = Metadata::default();

    for child in root.children() {
        let text = child.text().trim();
        if text.is_empty() {
            continue;
        }
        let value = Some(text.to_string());
        match child.local_name() {
            "title" => metadata.title = value,
            "subject" => metadata.subject = value,
            "creator" => metadata.author = value,
            "keywords" => metadata.keywords = value,
            "description" => metadata.comments = value,
            "category" => metadata.category = value,
            "lastModifiedBy" => metadata.last_modified_by = value,
            "created" => metadata.created = parse_datetime(text).ok(),
            "modified" => metadata.modified = parse_datetime(text).ok(),
            _ => {},
        }
    }

    Ok(metadata)
}

/// Parse a W3CDTF timestamp as written by Office.
///
/// Accepts `2023-10-10T14:30:00Z`, fractional seconds, explicit offsets and
/// the offset-less form, which is read as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
        .ok_or_else(|| OoxmlError::Malformed(format!("Invalid datetime format: {}", s)))
}
