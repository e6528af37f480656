//! Office Open XML (OOXML) reading for PowerPoint packages.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): ZIP container, content types, parts, relationships
//! 2. **XML** (`element`, `drawings`): owned element tree and DrawingML readers
//! 3. **Formats**: `pptx` for presentations, `metadata` for core properties
//!
//! # Example
//!
//! ```rust,no_run
//! use deckscan::ooxml::pptx::Package;
//!
//! let pkg = Package::open("deck.pptx")?;
//! let pres = pkg.presentation()?;
//! println!("{} slides", pres.slide_count()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod drawings;
pub mod element;
pub mod error;
pub mod metadata;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
