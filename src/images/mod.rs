//! Image persistence.
//!
//! Picture bytes found during analysis are handed to an [`ImageStore`],
//! which names them from their content and slide number and keeps them
//! somewhere. The analysis only ever sees the returned file name.
//!
//! - `naming`: content-hash file names and MIME type to extension mapping
//! - `store`: the `ImageStore` trait and its filesystem, memory and null
//!   implementations

pub mod naming;
pub mod store;

pub use naming::{extension_for, image_file_name};
pub use store::{FsImageStore, ImageStore, MemoryImageStore, NullImageStore};
