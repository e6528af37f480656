//! Solid fills.

use crate::ooxml::element::Element;

/// `RRGGBB` of a `a:solidFill/a:srgbClr` directly under `props`.
///
/// Only the element's own fill is read; the outline (`a:ln`) has its own
/// `solidFill` which is ignored. Theme and preset colours have no fixed
/// RGB value and read as `None`.
pub fn solid_fill_rgb(props: &Element) -> Option<String> {
    let value = props.find(&["solidFill", "srgbClr"])?.attr("val")?;
    (value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit()))
        .then(|| value.to_ascii_uppercase())
}
