/// Open Packaging Conventions (OPC) reader.
///
/// Read-only access to the ZIP container underneath a `.pptx` file:
///
/// - Content type discovery from `[Content_Types].xml`
/// - Package and part relationships (`_rels/*.rels`)
/// - Parts reachable from the package relationships, loaded into memory
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use rel::{Relationship, Relationships};
