/// Wrappers over the XML parts of a .pptx package.
pub mod presentation;
pub mod slide;

pub use presentation::PresentationPart;
pub use slide::{NotesSlidePart, SlideLayoutPart, SlideMasterPart, SlidePart};
