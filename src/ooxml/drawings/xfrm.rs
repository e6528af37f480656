//! `a:xfrm` / `p:xfrm` transforms.

use super::parse_i64;
use crate::ooxml::element::Element;
use crate::presentation::Geometry;

/// Read offset and extent from a transform element.
///
/// Each of the four values is read on its own, so a transform with an
/// offset but no extent still yields `left` and `top`.
pub fn read_geometry(xfrm: &Element) -> Geometry {
    let off = xfrm.child("off");
    let ext = xfrm.child("ext");
    Geometry {
        left: off.and_then(|e| e.attr("x")).and_then(parse_i64),
        top: off.and_then(|e| e.attr("y")).and_then(parse_i64),
        width: ext.and_then(|e| e.attr("cx")).and_then(parse_i64),
        height: ext.and_then(|e| e.attr("cy")).and_then(parse_i64),
    }
}

/// Locate the transform of a slide-tree element and read it.
///
/// Shapes and pictures keep it in `spPr`, groups in `grpSpPr`, graphic
/// frames directly as `p:xfrm`.
pub fn shape_geometry(shape: &Element) -> Geometry {
    let xfrm = match shape.local_name() {
        "grpSp" => shape.find(&["grpSpPr", "xfrm"]),
        "graphicFrame" => shape.child("xfrm"),
        _ => shape.find(&["spPr", "xfrm"]),
    };
    xfrm.map(read_geometry).unwrap_or_default()
}
