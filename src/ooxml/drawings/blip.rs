//! Picture fills (`a:blip`).

use crate::ooxml::element::Element;

/// Relationship ID of the embedded image of a `p:pic`.
///
/// Linked images (`r:link`) have no bytes in the package and yield `None`.
pub fn blip_embed(pic: &Element) -> Option<&str> {
    pic.find(&["blipFill", "blip"])?
        .attr("embed")
        .filter(|r_id| !r_id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blip_embed() {
        let xml = br#"<p:pic xmlns:p="urn:p" xmlns:a="urn:a" xmlns:r="urn:r">
            <p:blipFill><a:blip r:embed="rId7"/></p:blipFill></p:pic>"#;
        assert_eq!(blip_embed(&Element::parse(xml).unwrap()), Some("rId7"));

        let xml = br#"<p:pic xmlns:p="urn:p" xmlns:a="urn:a" xmlns:r="urn:r">
            <p:blipFill><a:blip r:link="rId8"/></p:blipFill></p:pic>"#;
        assert_eq!(blip_embed(&Element::parse(xml).unwrap()), None);
    }
}
