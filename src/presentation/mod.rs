//! Owned presentation model.
//!
//! The PPTX reader converts a package into these plain values so analysis
//! code never deals with package lifetimes or XML. Tests build the same
//! values by hand.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckscan::Presentation;
//!
//! let pres = Presentation::open("deck.pptx")?;
//! for (i, slide) in pres.slides.iter().enumerate() {
//!     println!("Slide {}: {} shapes", i + 1, slide.shapes.len());
//! }
//! # Ok::<(), deckscan::common::Error>(())
//! ```

mod prs;
mod shape;
mod slide;
mod text;

pub use prs::Presentation;
pub use shape::{Emu, Geometry, ImageData, Placeholder, PlaceholderKind, Shape, ShapeKind};
pub use slide::Slide;
pub use text::{Paragraph, Run, RunFont, TextBody};
