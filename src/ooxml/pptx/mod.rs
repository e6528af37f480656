//! PowerPoint (.pptx) reading.
//!
//! - `Package`: the .pptx file package
//! - `Presentation`: ordered slides and slide size
//! - `Slide`: shape tree and notes of one slide
//! - `layout`: slide layouts and masters, and the placeholder positions
//!   slides inherit from them
//! - `parts`: wrappers over the presentation, slide and notes slide parts
//! - `shapes`: conversion of shape tree elements into the owned model
//!
//! ```rust,no_run
//! use deckscan::ooxml::pptx::Package;
//!
//! let package = Package::open("deck.pptx")?;
//! let deck = package.load()?;
//! println!("{} slides", deck.slides.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod layout;
pub mod package;
pub mod parts;
pub mod presentation;
pub mod shapes;
pub mod slide;

pub use layout::{PlaceholderInheritance, SlideLayout, SlideMaster};
pub use package::Package;
pub use presentation::Presentation;
pub use slide::Slide;
