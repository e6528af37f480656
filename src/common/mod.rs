//! Common types shared across the crate.

pub mod error;
pub mod metadata;
pub mod unit;

pub use error::{Error, Result};
pub use metadata::Metadata;
