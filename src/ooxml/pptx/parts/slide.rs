/// Slide, slide layout, slide master and notes slide parts.
use crate::ooxml::drawings::xfrm::shape_geometry;
use crate::ooxml::element::Element;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::Part;
use crate::ooxml::pptx::shapes::read_placeholder;
use crate::presentation::{Geometry, Placeholder};

/// A slide part, `/ppt/slides/slideN.xml`.
pub struct SlidePart<'a> {
    part: &'a Part,
}

impl<'a> SlidePart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }

    /// Parse the slide XML. Malformed XML is an error.
    pub fn root(&self) -> Result<Element> {
        Element::parse(self.part.blob())
    }

    /// Parse the slide and return its `p:spTree`.
    pub fn shape_tree(&self) -> Result<Element> {
        self.root()?
            .into_child("cSld")
            .and_then(|c_sld| c_sld.into_child("spTree"))
            .ok_or_else(|| {
                OoxmlError::Malformed(format!("{} has no p:cSld/p:spTree", self.part.partname()))
            })
    }
}

/// Placeholders in the shape tree of a layout or master, with whatever
/// position their own `spPr/a:xfrm` gives them.
fn placeholder_geometries(part: &Part) -> Result<Vec<(Placeholder, Geometry)>> {
    let root = Element::parse(part.blob())?;
    let Some(tree) = root.find(&["cSld", "spTree"]) else {
        return Ok(Vec::new());
    };
    Ok(tree
        .children()
        .iter()
        .filter_map(|shape| read_placeholder(shape).map(|ph| (ph, shape_geometry(shape))))
        .collect())
}

/// A slide layout part, `/ppt/slideLayouts/slideLayoutN.xml`.
pub struct SlideLayoutPart<'a> {
    part: &'a Part,
}

impl<'a> SlideLayoutPart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }

    pub fn placeholders(&self) -> Result<Vec<(Placeholder, Geometry)>> {
        placeholder_geometries(self.part)
    }
}

/// A slide master part, `/ppt/slideMasters/slideMasterN.xml`.
pub struct SlideMasterPart<'a> {
    part: &'a Part,
}

impl<'a> SlideMasterPart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }

    pub fn placeholders(&self) -> Result<Vec<(Placeholder, Geometry)>> {
        placeholder_geometries(self.part)
    }
}

/// A notes slide part, `/ppt/notesSlides/notesSlideN.xml`.
pub struct NotesSlidePart<'a> {
    part: &'a Part,
}

impl<'a> NotesSlidePart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    /// Text of the body placeholder, untrimmed. `None` when the notes slide
    /// has no body placeholder.
    pub fn notes_text(&self) -> Result<Option<String>> {
        let root = Element::parse(self.part.blob())?;
        let Some(tree) = root.find(&["cSld", "spTree"]) else {
            return Ok(None);
        };

        let body = tree
            .children_named("sp")
            .find(|sp| read_placeholder(sp).is_some_and(|ph| ph.is_body()));

        Ok(body.map(|sp| {
            sp.child("txBody")
                .map(|tx| crate::ooxml::drawings::text::read_text_body(tx).text())
                .unwrap_or_default()
        }))
    }
}
