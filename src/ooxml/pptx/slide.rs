/// Slides of a .pptx presentation.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::{OpcPackage, PackURI};
use crate::ooxml::pptx::layout::SlideLayout;
use crate::ooxml::pptx::parts::{NotesSlidePart, SlidePart};
use crate::ooxml::pptx::shapes::read_shape_tree;
use crate::presentation::{self as model, ImageData};
use tracing::warn;

/// A slide borrowed from its package.
pub struct Slide<'a> {
    part: SlidePart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Slide<'a> {
    #[inline]
    pub(crate) fn new(part: SlidePart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    #[inline]
    pub fn partname(&self) -> &'a PackURI {
        self.part.part().partname()
    }

    /// Image bytes behind relationship `r_id` of this slide.
    fn image(&self, r_id: &str) -> Option<ImageData> {
        let part = self.package.related_part(self.part.part(), r_id).ok()?;
        let rel = self.part.part().rels().get(r_id)?;
        (rel.reltype() == relationship_type::IMAGE || part.content_type().starts_with("image/"))
            .then(|| ImageData {
                blob: part.blob().to_vec(),
                content_type: part.content_type().to_string(),
            })
    }

    /// Layout the slide is based on.
    pub fn layout(&self) -> Option<SlideLayout<'a>> {
        SlideLayout::for_slide(self.part.part(), self.package)
    }

    /// Top-level shapes with pictures resolved to their image bytes and
    /// placeholder positions filled in from the layout and master.
    ///
    /// Malformed slide XML is an error.
    pub fn shapes(&self) -> Result<Vec<model::Shape>> {
        let tree = self.part.shape_tree()?;
        let mut shapes = read_shape_tree(&tree, &|r_id: &str| self.image(r_id));
        if let Some(layout) = self.layout() {
            layout.inheritance().apply(&mut shapes);
        }
        Ok(shapes)
    }

    /// Raw notes text from the notes slide's body placeholder.
    ///
    /// A missing notes slide is `None`. A malformed one is logged and also
    /// reads as `None`.
    pub fn notes(&self) -> Option<String> {
        let part = self
            .package
            .related_part_by_type(self.part.part(), relationship_type::NOTES_SLIDE)?;
        match NotesSlidePart::from_part(part).notes_text() {
            Ok(notes) => notes,
            Err(e) => {
                warn!(part = %part.partname(), error = %e, "ignoring unreadable notes slide");
                None
            },
        }
    }

    /// Convert into the owned model.
    pub fn to_model(&self) -> Result<model::Slide> {
        Ok(model::Slide {
            shapes: self.shapes()?,
            notes: self.notes(),
        })
    }
}
