//! Unified error types for deckscan.
//!
//! Every layer (OPC container, PresentationML reader, exporters, batch runner)
//! has its own error enum; this module folds them into one `Error` so callers
//! only ever see a single type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
