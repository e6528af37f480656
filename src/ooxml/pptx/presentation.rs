/// Presentation object over the main part of a .pptx package.
use crate::ooxml::error::Result;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::pptx::parts::{PresentationPart, SlidePart};
use crate::ooxml::pptx::slide::Slide;

/// A PowerPoint presentation borrowed from its package.
///
/// Use `Package::presentation()` to get one.
///
/// # Examples
///
/// ```rust,no_run
/// use deckscan::ooxml::pptx::Package;
///
/// let pkg = Package::open("deck.pptx")?;
/// let pres = pkg.presentation()?;
/// for slide in pres.slides()? {
///     println!("{}: {} shapes", slide.partname(), slide.shapes()?.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Presentation<'a> {
    part: PresentationPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Slides in `p:sldIdLst` order.
    ///
    /// A slide ID whose relationship or part is missing fails the whole call.
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let pres_part = self.part.part();
        self.part
            .slide_rids()?
            .iter()
            .map(|rid| {
                let part = self.package.related_part(pres_part, rid)?;
                Ok(Slide::new(SlidePart::from_part(part), self.package))
            })
            .collect()
    }

    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.part.slide_rids()?.len())
    }

    /// Slide width and height in EMUs.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        self.part.slide_size()
    }
}
