/// Slide-tree elements to owned shapes.
use crate::ooxml::drawings::{fill::solid_fill_rgb, text::read_text_body, xfrm::shape_geometry};
use crate::ooxml::element::Element;
use crate::ooxml::pptx::shapes::picture::{ImageResolver, resolve_picture};
use crate::presentation::{Placeholder, PlaceholderKind, Shape, ShapeKind};
use tracing::debug;

/// Non-visual properties element of each shape element.
fn non_visual(element: &Element) -> Option<&Element> {
    let nv = match element.local_name() {
        "sp" => "nvSpPr",
        "pic" => "nvPicPr",
        "grpSp" => "nvGrpSpPr",
        "graphicFrame" => "nvGraphicFramePr",
        "cxnSp" => "nvCxnSpPr",
        "contentPart" => "nvContentPartPr",
        _ => return None,
    };
    element.child(nv)
}

/// `p:nvPr/p:ph` of a shape element, if it is a placeholder.
pub fn read_placeholder(element: &Element) -> Option<Placeholder> {
    let ph = non_visual(element)?.find(&["nvPr", "ph"])?;
    Some(Placeholder {
        kind: PlaceholderKind::from_type_attr(ph.attr("type")),
        idx: ph.attr("idx").and_then(|idx| atoi_simd::parse::<u32>(idx.as_bytes()).ok()),
    })
}

/// Kind of a `p:sp`: placeholder, then custom geometry, then preset
/// geometry, then text box.
fn autoshape_kind(sp: &Element, placeholder: Option<&Placeholder>) -> ShapeKind {
    let sp_pr = sp.child("spPr");
    let is_text_box = sp
        .find(&["nvSpPr", "cNvSpPr"])
        .and_then(|c| c.attr("txBox"))
        .is_some_and(|v| v == "1" || v == "true");

    if placeholder.is_some() {
        ShapeKind::Placeholder
    } else if sp_pr.and_then(|p| p.child("custGeom")).is_some() {
        ShapeKind::Freeform
    } else if let Some(prst) = sp_pr.and_then(|p| p.child("prstGeom"))
        && !is_text_box
    {
        ShapeKind::AutoShape {
            preset: prst.attr("prst").map(str::to_string),
        }
    } else if is_text_box {
        ShapeKind::TextBox
    } else {
        ShapeKind::Other
    }
}

/// Read one shape element. Returns `None` for children of a shape tree that
/// are not shapes (`p:nvGrpSpPr`, `p:grpSpPr`, `p:extLst`, ...).
pub fn read_shape(element: &Element, images: &ImageResolver<'_>) -> Option<Shape> {
    let placeholder = read_placeholder(element);
    let kind = match element.local_name() {
        "sp" => autoshape_kind(element, placeholder.as_ref()),
        "pic" => match resolve_picture(element, images) {
            Some(image) => ShapeKind::Picture { image },
            None => ShapeKind::Other,
        },
        "grpSp" => ShapeKind::Group {
            children: read_shape_tree(element, images),
        },
        "graphicFrame" => ShapeKind::GraphicFrame,
        "cxnSp" => ShapeKind::Connector,
        "contentPart" => ShapeKind::Other,
        _ => return None,
    };

    let c_nv_pr = non_visual(element).and_then(|nv| nv.child("cNvPr"));
    let shape = Shape {
        id: c_nv_pr
            .and_then(|c| c.attr("id"))
            .and_then(|id| atoi_simd::parse::<u32>(id.as_bytes()).ok()),
        name: c_nv_pr
            .and_then(|c| c.attr("name"))
            .unwrap_or_default()
            .to_string(),
        geometry: shape_geometry(element),
        text: element
            .child("txBody")
            .filter(|_| element.is("sp"))
            .map(read_text_body),
        fill: element.child("spPr").and_then(solid_fill_rgb),
        placeholder,
        kind,
    };

    if shape.geometry.top.is_none() {
        debug!(shape = %shape.name, kind = shape.kind.label(), "shape has no position of its own");
    }
    Some(shape)
}

/// Read every shape child of a `p:spTree` or `p:grpSp`, in document order.
pub fn read_shape_tree(tree: &Element, images: &ImageResolver<'_>) -> Vec<Shape> {
    tree.children()
        .iter()
        .filter_map(|child| read_shape(child, images))
        .collect()
}
