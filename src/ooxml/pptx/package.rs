/// Package implementation for PowerPoint presentations.
use crate::common::Metadata;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::metadata::extract_metadata;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::parts::PresentationPart;
use crate::ooxml::pptx::presentation::Presentation;
use crate::presentation as model;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, warn};

/// A PowerPoint (.pptx / .pptm) package.
///
/// # Examples
///
/// ```rust,no_run
/// use deckscan::ooxml::pptx::Package;
///
/// let pkg = Package::open("deck.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    opc: OpcPackage,
}

impl Package {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Open a package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    /// Check that the main part is a presentation (plain or macro-enabled).
    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::MissingPart(format!("main presentation part: {}", e)))?;

        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::WrongContentType {
                expected: format!("{} or {}", ct::PML_PRESENTATION_MAIN, ct::PML_PRES_MACRO_MAIN),
                got: content_type.to_string(),
            });
        }

        debug!(parts = opc.part_count(), "opened presentation package");
        Ok(Self { opc })
    }

    /// The main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::MissingPart(format!("main presentation part: {}", e)))?;
        Ok(Presentation::new(PresentationPart::from_part(main_part), &self.opc))
    }

    /// Core document properties. Unreadable properties are logged and
    /// treated as absent.
    pub fn metadata(&self) -> Metadata {
        extract_metadata(&self.opc).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable core properties");
            Metadata::default()
        })
    }

    /// Read the whole deck into the owned presentation model.
    pub fn load(&self) -> Result<model::Presentation> {
        let slides = self
            .presentation()?
            .slides()?
            .iter()
            .map(|slide| slide.to_model())
            .collect::<Result<Vec<_>>>()?;

        Ok(model::Presentation {
            slides,
            properties: self.metadata(),
            ..Default::default()
        })
    }

    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}
