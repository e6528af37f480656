//! Shapes on a slide.

use super::text::TextBody;
use crate::common::unit::emu_to_inches;

/// English Metric Units, 914400 per inch.
pub type Emu = i64;

/// Offset and extent of a shape, each read independently from `a:xfrm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub left: Option<Emu>,
    pub top: Option<Emu>,
    pub width: Option<Emu>,
    pub height: Option<Emu>,
}

impl Geometry {
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Fill fields missing here from `inherited`.
    pub fn or(self, inherited: Geometry) -> Geometry {
        Geometry {
            left: self.left.or(inherited.left),
            top: self.top.or(inherited.top),
            width: self.width.or(inherited.width),
            height: self.height.or(inherited.height),
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.left.is_some() && self.top.is_some() && self.width.is_some() && self.height.is_some()
    }

    #[inline]
    pub fn left_in(&self) -> Option<f64> {
        self.left.map(emu_to_inches)
    }

    #[inline]
    pub fn top_in(&self) -> Option<f64> {
        self.top.map(emu_to_inches)
    }

    #[inline]
    pub fn width_in(&self) -> Option<f64> {
        self.width.map(emu_to_inches)
    }

    #[inline]
    pub fn height_in(&self) -> Option<f64> {
        self.height.map(emu_to_inches)
    }
}

/// Image bytes behind a picture shape.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    pub blob: Vec<u8>,
    /// MIME type of the image part, e.g. `image/png`
    pub content_type: String,
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("len", &self.blob.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Placeholder role from `p:nvPr/p:ph/@type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    Title,
    CenterTitle,
    SubTitle,
    Body,
    /// `type` omitted, which PresentationML reads as `obj`
    Object,
    Other(String),
}

impl PlaceholderKind {
    pub fn from_type_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("obj") => PlaceholderKind::Object,
            Some("title") => PlaceholderKind::Title,
            Some("ctrTitle") => PlaceholderKind::CenterTitle,
            Some("subTitle") => PlaceholderKind::SubTitle,
            Some("body") => PlaceholderKind::Body,
            Some(other) => PlaceholderKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub idx: Option<u32>,
}

impl Placeholder {
    pub fn is_title(&self) -> bool {
        matches!(self.kind, PlaceholderKind::Title | PlaceholderKind::CenterTitle)
    }

    pub fn is_body(&self) -> bool {
        self.kind == PlaceholderKind::Body
    }

    /// `idx` with the PresentationML default of 0.
    #[inline]
    pub fn index(&self) -> u32 {
        self.idx.unwrap_or(0)
    }

    /// Role of the master placeholder this one inherits from. Masters
    /// carry only title, body and the footer-area placeholders.
    pub fn master_kind(&self) -> PlaceholderKind {
        match &self.kind {
            PlaceholderKind::CenterTitle | PlaceholderKind::Title => PlaceholderKind::Title,
            PlaceholderKind::SubTitle | PlaceholderKind::Body | PlaceholderKind::Object => {
                PlaceholderKind::Body
            },
            PlaceholderKind::Other(other) => PlaceholderKind::Other(other.clone()),
        }
    }
}

/// What a shape element is. Closed: every slide-tree element maps to one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// `p:sp` with `txBox="1"`
    TextBox,
    /// `p:sp` carrying `p:ph`
    Placeholder,
    /// `p:sp` with preset geometry
    AutoShape { preset: Option<String> },
    /// `p:sp` with custom geometry
    Freeform,
    /// `p:pic` whose image part resolved
    Picture { image: ImageData },
    /// `p:grpSp`
    Group { children: Vec<Shape> },
    /// `p:graphicFrame` (tables, charts, diagrams)
    GraphicFrame,
    /// `p:cxnSp`
    Connector,
    Other,
}

impl ShapeKind {
    /// Snake-case label used in exported records.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::TextBox => "text_box",
            ShapeKind::Placeholder => "placeholder",
            ShapeKind::AutoShape { .. } => "auto_shape",
            ShapeKind::Freeform => "freeform",
            ShapeKind::Picture { .. } => "picture",
            ShapeKind::Group { .. } => "group",
            ShapeKind::GraphicFrame => "graphic_frame",
            ShapeKind::Connector => "connector",
            ShapeKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// `p:cNvPr/@id`
    pub id: Option<u32>,
    /// `p:cNvPr/@name`
    pub name: String,
    pub kind: ShapeKind,
    pub placeholder: Option<Placeholder>,
    pub geometry: Geometry,
    pub text: Option<TextBody>,
    /// Solid fill of the shape's own `spPr`, `RRGGBB`
    pub fill: Option<String>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: None,
            name: String::new(),
            kind,
            placeholder: None,
            geometry: Geometry::default(),
            text: None,
            fill: None,
        }
    }

    /// Text box holding `text`, one paragraph per line.
    pub fn text_box(text: &str) -> Self {
        Self::new(ShapeKind::TextBox).with_text(text)
    }

    pub fn picture(image: ImageData) -> Self {
        Self::new(ShapeKind::Picture { image })
    }

    pub fn group(children: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Group { children })
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(TextBody::from_text(text));
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_placeholder(mut self, kind: PlaceholderKind) -> Self {
        self.placeholder = Some(Placeholder { kind, idx: None });
        self
    }

    /// Full text of the shape, `None` for shapes without a text body.
    pub fn text(&self) -> Option<String> {
        self.text.as_ref().map(TextBody::text)
    }

    pub fn fill_color(&self) -> Option<&str> {
        self.fill.as_deref()
    }

    pub fn is_picture(&self) -> bool {
        matches!(self.kind, ShapeKind::Picture { .. })
    }

    /// Children of a group shape, empty for every other kind.
    pub fn children(&self) -> &[Shape] {
        match &self.kind {
            ShapeKind::Group { children } => children,
            _ => &[],
        }
    }

    /// Pictures in this shape and, for groups, all nested shapes.
    pub fn picture_count(&self) -> usize {
        match &self.kind {
            ShapeKind::Picture { .. } => 1,
            ShapeKind::Group { children } => children.iter().map(Shape::picture_count).sum(),
            _ => 0,
        }
    }

    /// Depth-first iterator over this shape and everything nested below it.
    pub fn iter_tree(&self) -> impl Iterator<Item = &Shape> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let shape = stack.pop()?;
            stack.extend(shape.children().iter().rev());
            Some(shape)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::EMUS_PER_INCH;

    fn png() -> ImageData {
        ImageData {
            blob: vec![0x89, b'P', b'N', b'G'],
            content_type: "image/png".to_string(),
        }
    }

    #[test]
    fn test_placeholder_kind() {
        assert_eq!(PlaceholderKind::from_type_attr(None), PlaceholderKind::Object);
        assert_eq!(PlaceholderKind::from_type_attr(Some("ctrTitle")), PlaceholderKind::CenterTitle);
        assert_eq!(
            PlaceholderKind::from_type_attr(Some("sldNum")),
            PlaceholderKind::Other("sldNum".to_string())
        );
        let title = Placeholder {
            kind: PlaceholderKind::CenterTitle,
            idx: None,
        };
        assert!(title.is_title());
        assert!(!title.is_body());
    }

    #[test]
    fn test_geometry_inches() {
        let geometry = Geometry {
            top: Some(EMUS_PER_INCH * 6),
            ..Default::default()
        };
        assert_eq!(geometry.top_in(), Some(6.0));
        assert_eq!(geometry.left_in(), None);
    }

    #[test]
    fn test_geometry_or_keeps_own_values() {
        let own = Geometry {
            left: Some(10),
            ..Default::default()
        };
        let merged = own.or(Geometry::new(1, 2, 3, 4));
        assert_eq!(merged, Geometry::new(10, 2, 3, 4));
        assert!(merged.is_complete());
        assert!(!own.is_complete());
        assert_eq!(Geometry::default().or(Geometry::default()), Geometry::default());
    }

    #[test]
    fn test_master_kind() {
        let ph = |kind| Placeholder { kind, idx: None };
        assert_eq!(ph(PlaceholderKind::CenterTitle).master_kind(), PlaceholderKind::Title);
        assert_eq!(ph(PlaceholderKind::Object).master_kind(), PlaceholderKind::Body);
        assert_eq!(ph(PlaceholderKind::SubTitle).master_kind(), PlaceholderKind::Body);
        assert_eq!(
            ph(PlaceholderKind::Other("ftr".to_string())).master_kind(),
            PlaceholderKind::Other("ftr".to_string())
        );
        assert_eq!(ph(PlaceholderKind::Title).index(), 0);
    }

    #[test]
    fn test_picture_count_recurses_into_groups() {
        let nested = Shape::group(vec![
            Shape::picture(png()),
            Shape::group(vec![Shape::picture(png()), Shape::text_box("caption")]),
        ]);
        assert_eq!(nested.picture_count(), 2);
        assert_eq!(nested.iter_tree().count(), 5);
        assert_eq!(Shape::text_box("x").picture_count(), 0);
    }

    #[test]
    fn test_iter_tree_is_document_order() {
        let group = Shape::group(vec![Shape::text_box("a"), Shape::text_box("b")]);
        let texts: Vec<_> = group.iter_tree().filter_map(Shape::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
