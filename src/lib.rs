//! deckscan - inspect PowerPoint presentations
//!
//! Reads `.pptx`/`.pptm` files and extracts structured content: per-slide
//! text, images and shapes plus document metadata. Shapes are classified
//! with text, position and pattern signals to find logos, brand marks,
//! copyright notices and confidentiality markings.
//!
//! # Features
//!
//! - **PPTX reader**: OPC package walk, slide shape trees (nested groups
//!   included), notes slides and core properties
//! - **Shape classification**: text, picture, auto-shape and freeform records
//!   with font and position details
//! - **Logo detection**: configurable size and position heuristics
//! - **Tagging**: copyright, confidential, company, agenda, introduction and
//!   conclusion tags per slide, plus externally supplied tags
//! - **Exports**: JSON (full fidelity) and CSV (one row per slide)
//! - **Batch mode**: every presentation in a directory, in parallel
//!
//! # Example
//!
//! ```no_run
//! use deckscan::Presentation;
//! use deckscan::images::FsImageStore;
//! use deckscan::inspect::{Inspector, InspectorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = Presentation::open("deck.pptx")?;
//! let inspector = Inspector::new(InspectorConfig::default())?;
//! let mut images = FsImageStore::create("images")?;
//!
//! let analysis = inspector.analyze_document(&pres, &mut images);
//! for slide in &analysis.slides {
//!     println!("{}: {:?} {:?}", slide.slide_number, slide.title, slide.tags);
//! }
//! # Ok(())
//! # }
//! ```

/// Error type, unit conversion and document properties
pub mod common;

/// OOXML (Office Open XML) reading: OPC packages and PresentationML
pub mod ooxml;

/// Format-independent presentation model
pub mod presentation;

/// Shape classification and slide/document analysis
pub mod inspect;

/// Image persistence
pub mod images;

/// JSON and CSV exporters
pub mod export;

/// Directory batch processing
pub mod batch;

pub use common::{Error, Metadata, Result};
pub use inspect::{Analysis, Inspector, InspectorConfig};
pub use presentation::{Presentation, Shape, ShapeKind, Slide};
