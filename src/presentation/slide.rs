//! Slides of a presentation.

use super::shape::Shape;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    /// Top-level shapes of `p:spTree` in document order
    pub shapes: Vec<Shape>,
    /// Raw text of the notes slide body placeholder
    pub notes: Option<String>,
}

impl Slide {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes, notes: None }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The first top-level title placeholder (`title` or `ctrTitle`).
    pub fn title_shape(&self) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|shape| shape.placeholder.as_ref().is_some_and(|ph| ph.is_title()))
    }

    /// Trimmed title text, `None` when there is no title or it is blank.
    pub fn title(&self) -> Option<String> {
        let text = self.title_shape()?.text()?;
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Pictures on the slide, including those nested in groups.
    pub fn picture_count(&self) -> usize {
        self.shapes.iter().map(Shape::picture_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::PlaceholderKind;

    #[test]
    fn test_title_uses_title_placeholder() {
        let slide = Slide::new(vec![
            Shape::text_box("Not the title"),
            Shape::text_box("  Roadmap  ").with_placeholder(PlaceholderKind::Title),
        ]);
        assert_eq!(slide.title().as_deref(), Some("Roadmap"));
    }

    #[test]
    fn test_blank_title_is_none() {
        let slide = Slide::new(vec![
            Shape::text_box("   ").with_placeholder(PlaceholderKind::CenterTitle),
        ]);
        assert_eq!(slide.title(), None);
        assert_eq!(Slide::default().title(), None);
    }
}
