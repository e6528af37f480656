//! Content inspection.
//!
//! Walks the shape tree of every slide, classifies each shape and rolls
//! the results up into slide and document records:
//!
//! ```text
//! Inspector::analyze_document
//!   -> analyze_slide         (per slide: title, notes, tags)
//!     -> classify            (per shape: text, picture, graphic)
//!       -> walk_group        (groups: merge children in order)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use deckscan::images::NullImageStore;
//! use deckscan::inspect::{Inspector, InspectorConfig, SummaryReport};
//!
//! let inspector = Inspector::new(InspectorConfig::default())?;
//! let analysis = inspector.inspect_path("deck.pptx", &mut NullImageStore)?;
//! let summary = SummaryReport::from_analysis(&analysis);
//! println!("{} images", summary.content_analysis.total_images);
//! # Ok::<(), deckscan::common::Error>(())
//! ```

pub mod classify;
pub mod config;
pub mod custom_tags;
pub mod document;
pub mod patterns;
pub mod records;
pub mod slide;
pub mod summary;
pub mod tags;
pub mod walker;

pub use classify::{ShapeContribution, is_logo_image};
pub use config::{InspectorConfig, LogoThresholds};
pub use custom_tags::CustomTags;
pub use document::{Analysis, Inspector};
pub use patterns::{PatternSet, find_matches};
pub use records::{
    DocumentMetadata, FontInfo, GraphicElementRecord, LogoBrandRecord, Positioning, SlideRecord,
    TextShapeRecord,
};
pub use summary::SummaryReport;
