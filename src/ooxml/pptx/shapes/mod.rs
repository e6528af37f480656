/// Shape tree reading for PowerPoint slides.
///
/// Converts the children of a `p:spTree` (or `p:grpSp`) into the owned
/// [`Shape`](crate::presentation::Shape) model. The kind is decided by the
/// element name, then by placeholder, geometry and `txBox` markers.
pub mod base;
pub mod picture;

pub use base::{read_placeholder, read_shape, read_shape_tree};
pub use picture::ImageResolver;
