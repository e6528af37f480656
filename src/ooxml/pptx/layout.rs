//! Slide layouts and masters, and the placeholder positions slides inherit
//! from them.
//!
//! A placeholder on a slide usually carries no `a:xfrm` of its own. Its
//! position comes from the matching placeholder on the slide layout, and
//! failing that from the slide master:
//!
//! - slide → layout: same `idx`, else same type
//! - layout → master: same type, with `ctrTitle` read as `title` and
//!   `subTitle`/`obj` read as `body`
//!
//! Each geometry field is inherited on its own, so a layout that only moves
//! a placeholder still picks up the master's extent.

use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type};
use crate::ooxml::opc::{OpcPackage, Part};
use crate::ooxml::pptx::parts::{SlideLayoutPart, SlideMasterPart};
use crate::presentation::{Geometry, Placeholder, Shape, ShapeKind};
use tracing::{debug, warn};

/// The layout a slide is based on.
pub struct SlideLayout<'a> {
    part: SlideLayoutPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> SlideLayout<'a> {
    /// Layout of `slide`, if the slide has one and it is a layout part.
    pub(crate) fn for_slide(slide: &'a Part, package: &'a OpcPackage) -> Option<Self> {
        let part = package.related_part_by_type(slide, relationship_type::SLIDE_LAYOUT)?;
        if part.content_type() != ct::PML_SLIDE_LAYOUT {
            debug!(part = %part.partname(), content_type = part.content_type(), "not a slide layout");
            return None;
        }
        Some(Self {
            part: SlideLayoutPart::from_part(part),
            package,
        })
    }

    /// Master the layout belongs to.
    pub fn master(&self) -> Option<SlideMaster<'a>> {
        let part = self
            .package
            .related_part_by_type(self.part.part(), relationship_type::SLIDE_MASTER)?;
        (part.content_type() == ct::PML_SLIDE_MASTER).then(|| SlideMaster {
            part: SlideMasterPart::from_part(part),
        })
    }

    pub fn placeholders(&self) -> Result<Vec<(Placeholder, Geometry)>> {
        self.part.placeholders()
    }

    /// Placeholder positions of this layout and its master.
    ///
    /// An unreadable layout or master is logged and contributes nothing.
    pub fn inheritance(&self) -> PlaceholderInheritance {
        let layout = self.placeholders().unwrap_or_else(|e| {
            warn!(part = %self.part.part().partname(), error = %e, "ignoring unreadable slide layout");
            Vec::new()
        });
        let master = self
            .master()
            .map(|master| {
                master.placeholders().unwrap_or_else(|e| {
                    warn!(part = %master.part.part().partname(), error = %e, "ignoring unreadable slide master");
                    Vec::new()
                })
            })
            .unwrap_or_default();
        PlaceholderInheritance { layout, master }
    }
}

/// The master a layout is based on.
pub struct SlideMaster<'a> {
    part: SlideMasterPart<'a>,
}

impl SlideMaster<'_> {
    pub fn placeholders(&self) -> Result<Vec<(Placeholder, Geometry)>> {
        self.part.placeholders()
    }
}

/// Placeholder positions available to the slides of one layout.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderInheritance {
    layout: Vec<(Placeholder, Geometry)>,
    master: Vec<(Placeholder, Geometry)>,
}

impl PlaceholderInheritance {
    pub fn new(layout: Vec<(Placeholder, Geometry)>, master: Vec<(Placeholder, Geometry)>) -> Self {
        Self { layout, master }
    }

    fn layout_match(&self, placeholder: &Placeholder) -> Option<&(Placeholder, Geometry)> {
        self.layout
            .iter()
            .find(|(ph, _)| ph.index() == placeholder.index())
            .or_else(|| self.layout.iter().find(|(ph, _)| ph.kind == placeholder.kind))
    }

    fn master_match(&self, placeholder: &Placeholder) -> Option<&Geometry> {
        let kind = placeholder.master_kind();
        self.master
            .iter()
            .find(|(ph, _)| ph.master_kind() == kind)
            .map(|(_, geometry)| geometry)
    }

    /// Geometry a slide placeholder inherits. Fields neither layout nor
    /// master define stay `None`.
    pub fn resolve(&self, placeholder: &Placeholder) -> Geometry {
        let (via, layout) = match self.layout_match(placeholder) {
            Some((ph, geometry)) => (ph, *geometry),
            None => (placeholder, Geometry::default()),
        };
        match self.master_match(via) {
            Some(master) => layout.or(*master),
            None => layout,
        }
    }

    /// Fill missing geometry of every placeholder in `shapes`, groups included.
    pub fn apply(&self, shapes: &mut [Shape]) {
        for shape in shapes {
            if let Some(placeholder) = &shape.placeholder
                && !shape.geometry.is_complete()
            {
                shape.geometry = shape.geometry.or(self.resolve(placeholder));
            }
            if let ShapeKind::Group { children } = &mut shape.kind {
                self.apply(children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::PlaceholderKind;

    fn ph(kind: PlaceholderKind, idx: Option<u32>) -> Placeholder {
        Placeholder { kind, idx }
    }

    fn top_only(top: i64) -> Geometry {
        Geometry {
            top: Some(top),
            ..Default::default()
        }
    }

    #[test]
    fn test_layout_position_wins_over_master() {
        let inheritance = PlaceholderInheritance::new(
            vec![(ph(PlaceholderKind::Title, None), top_only(274_320))],
            vec![(ph(PlaceholderKind::Title, None), Geometry::new(1, 2, 3, 4))],
        );
        let geometry = inheritance.resolve(&ph(PlaceholderKind::Title, None));
        assert_eq!(geometry, Geometry::new(1, 274_320, 3, 4));
    }

    #[test]
    fn test_slide_matches_layout_by_idx() {
        let inheritance = PlaceholderInheritance::new(
            vec![
                (ph(PlaceholderKind::Title, None), top_only(100)),
                (ph(PlaceholderKind::Object, Some(1)), top_only(200)),
                (ph(PlaceholderKind::Object, Some(2)), top_only(300)),
            ],
            Vec::new(),
        );
        assert_eq!(inheritance.resolve(&ph(PlaceholderKind::Object, Some(2))).top, Some(300));
        // Types differ, idx decides
        assert_eq!(inheritance.resolve(&ph(PlaceholderKind::Body, Some(1))).top, Some(200));
        // No idx match, falls back to type
        assert_eq!(inheritance.resolve(&ph(PlaceholderKind::Object, Some(9))).top, Some(200));
    }

    #[test]
    fn test_master_fallback_maps_types() {
        let inheritance = PlaceholderInheritance::new(
            Vec::new(),
            vec![
                (ph(PlaceholderKind::Title, None), top_only(10)),
                (ph(PlaceholderKind::Body, Some(1)), top_only(20)),
            ],
        );
        assert_eq!(inheritance.resolve(&ph(PlaceholderKind::CenterTitle, None)).top, Some(10));
        assert_eq!(inheritance.resolve(&ph(PlaceholderKind::SubTitle, Some(1))).top, Some(20));
        assert_eq!(
            inheritance.resolve(&ph(PlaceholderKind::Other("dt".into()), Some(10))),
            Geometry::default()
        );
    }

    #[test]
    fn test_apply_keeps_own_geometry_and_skips_plain_shapes() {
        let inheritance = PlaceholderInheritance::new(
            vec![(ph(PlaceholderKind::Title, None), Geometry::new(1, 2, 3, 4))],
            Vec::new(),
        );
        let mut own = Shape::text_box("Title").with_placeholder(PlaceholderKind::Title);
        own.geometry = top_only(99);
        let mut shapes = vec![
            own,
            Shape::text_box("plain"),
            Shape::group(vec![Shape::text_box("nested").with_placeholder(PlaceholderKind::Title)]),
        ];
        inheritance.apply(&mut shapes);

        assert_eq!(shapes[0].geometry, Geometry::new(1, 99, 3, 4));
        assert_eq!(shapes[1].geometry, Geometry::default());
        assert_eq!(shapes[2].children()[0].geometry, Geometry::new(1, 2, 3, 4));
    }
}
