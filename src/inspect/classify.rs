//! Per-shape classification.
//!
//! A shape contributes to at most one of the text, picture and graphic
//! branches, checked in that order. Groups contribute whatever their
//! children do.

use super::config::LogoThresholds;
use super::records::{
    FontInfo, GraphicElementRecord, LogoBrandRecord, Positioning, SlideRecord, TextShapeRecord,
};
use super::Inspector;
use crate::images::{image_file_name, ImageStore};
use crate::presentation::{ImageData, Shape, ShapeKind};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// What one shape (or a group and everything below it) adds to its slide.
///
/// A leaf fills each category with at most one entry; a group holds the
/// concatenation of its children's entries in traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeContribution {
    pub text: SmallVec<[String; 1]>,
    pub image_files: SmallVec<[String; 1]>,
    pub text_shapes: SmallVec<[TextShapeRecord; 1]>,
    pub graphic_elements: SmallVec<[GraphicElementRecord; 1]>,
    pub logo_brands: SmallVec<[LogoBrandRecord; 1]>,
}

impl ShapeContribution {
    /// Append every category of `other` after this one's entries.
    pub fn merge(&mut self, other: ShapeContribution) {
        self.text.extend(other.text);
        self.image_files.extend(other.image_files);
        self.text_shapes.extend(other.text_shapes);
        self.graphic_elements.extend(other.graphic_elements);
        self.logo_brands.extend(other.logo_brands);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.image_files.is_empty()
            && self.text_shapes.is_empty()
            && self.graphic_elements.is_empty()
            && self.logo_brands.is_empty()
    }

    /// Move the entries into a slide record, counting the images.
    pub(crate) fn append_to(self, record: &mut SlideRecord) {
        record.image_count += self.image_files.len();
        record.text_content.extend(self.text);
        record.image_files.extend(self.image_files);
        record.text_shapes.extend(self.text_shapes);
        record.graphic_elements.extend(self.graphic_elements);
        record.logos_and_brands.extend(self.logo_brands);
    }
}

impl Inspector {
    /// Classify one shape on slide `slide_number`.
    ///
    /// Picture bytes are handed to `images`; if that fails the file name is
    /// still recorded so image counts stay consistent.
    pub fn classify(
        &self,
        shape: &Shape,
        slide_number: usize,
        images: &mut dyn ImageStore,
    ) -> ShapeContribution {
        let mut out = ShapeContribution::default();

        if let Some(text) = shape_text(shape) {
            let positioning = Positioning::from(&shape.geometry);
            let font_info = shape
                .text
                .as_ref()
                .and_then(|body| body.first_run_font())
                .map(FontInfo::from)
                .unwrap_or_default();
            if self.is_logo_text(&text, &positioning) {
                out.logo_brands.push(LogoBrandRecord::TextLogo {
                    content: text.clone(),
                    font_info: font_info.clone(),
                    positioning,
                    slide_number,
                });
            }
            out.text_shapes.push(TextShapeRecord {
                text: text.clone(),
                font_info,
                positioning,
                slide_number,
            });
            out.text.push(text);
            return out;
        }

        match &shape.kind {
            ShapeKind::Picture { image } => {
                let file = persist_image(images, image, slide_number);
                let positioning = Positioning::from(&shape.geometry);
                if is_logo_image(&positioning, &self.config.logo) {
                    out.logo_brands.push(LogoBrandRecord::ImageLogo {
                        file: file.clone(),
                        positioning,
                        slide_number,
                    });
                }
                out.image_files.push(file);
            }
            ShapeKind::AutoShape { preset } => {
                out.graphic_elements
                    .push(graphic_element(shape, preset.clone(), slide_number));
            }
            ShapeKind::Freeform => {
                out.graphic_elements
                    .push(graphic_element(shape, None, slide_number));
            }
            ShapeKind::Group { .. } => {
                out = self.walk_group(shape, slide_number, images);
            }
            ShapeKind::TextBox
            | ShapeKind::Placeholder
            | ShapeKind::GraphicFrame
            | ShapeKind::Connector
            | ShapeKind::Other => {}
        }
        out
    }

    /// Brand wording anywhere in the text, or a top edge in the header or
    /// footer band. Without a top edge only the wording counts.
    fn is_logo_text(&self, text: &str, positioning: &Positioning) -> bool {
        if self.brand.is_match(text) {
            return true;
        }
        let logo = &self.config.logo;
        match positioning.top {
            Some(top) => top < logo.text_top_max_in || top > logo.text_bottom_min_in,
            None => {
                debug!("text shape has no top offset, position check skipped");
                false
            }
        }
    }
}

/// Trimmed text of a shape, `None` when it has none or it is blank.
fn shape_text(shape: &Shape) -> Option<String> {
    let text = shape.text()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn persist_image(images: &mut dyn ImageStore, image: &ImageData, slide_number: usize) -> String {
    images.persist(image, slide_number).unwrap_or_else(|e| {
        let name = image_file_name(&image.blob, &image.content_type, slide_number);
        warn!(slide = slide_number, file = %name, error = %e, "failed to persist image");
        name
    })
}

/// Small enough (both sides under the maximum, one side over the minimum)
/// and, when the top edge is known, in the header or footer band.
///
/// A missing width or height counts as zero.
pub fn is_logo_image(positioning: &Positioning, thresholds: &LogoThresholds) -> bool {
    let width = positioning.width.unwrap_or(0.0);
    let height = positioning.height.unwrap_or(0.0);
    let logo_sized = width < thresholds.image_max_in
        && height < thresholds.image_max_in
        && (width > thresholds.image_min_in || height > thresholds.image_min_in);

    match positioning.top {
        Some(top) => {
            logo_sized && (top < thresholds.image_top_max_in || top > thresholds.image_bottom_min_in)
        }
        None => logo_sized,
    }
}

fn graphic_element(
    shape: &Shape,
    auto_shape_type: Option<String>,
    slide_number: usize,
) -> GraphicElementRecord {
    GraphicElementRecord {
        shape_type: shape.kind.label().to_string(),
        auto_shape_type,
        positioning: Positioning::from(&shape.geometry),
        fill_color: shape.fill_color().map(str::to_string),
        text: shape_text(shape),
        slide_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches_to_emu;
    use crate::common::Result;
    use crate::images::{MemoryImageStore, NullImageStore};
    use crate::inspect::InspectorConfig;
    use crate::presentation::{Geometry, PlaceholderKind};

    fn inspector() -> Inspector {
        Inspector::new(InspectorConfig::default()).unwrap()
    }

    fn inches(left: f64, top: f64, width: f64, height: f64) -> Geometry {
        Geometry::new(
            inches_to_emu(left),
            inches_to_emu(top),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }

    fn png(seed: u8) -> ImageData {
        ImageData {
            blob: vec![0x89, b'P', b'N', b'G', seed],
            content_type: "image/png".to_string(),
        }
    }

    struct FailingStore;

    impl ImageStore for FailingStore {
        fn persist(&mut self, _image: &ImageData, _slide_number: usize) -> Result<String> {
            Err(crate::common::Error::Other("disk full".to_string()))
        }
    }

    #[test]
    fn test_small_picture_near_top_is_image_logo() {
        let shape = Shape::picture(png(1)).with_geometry(inches(0.5, 0.3, 2.0, 1.5));
        let mut store = MemoryImageStore::new();
        let out = inspector().classify(&shape, 1, &mut store);

        assert_eq!(out.image_files.len(), 1);
        assert!(out.image_files[0].starts_with("slide_01_"));
        assert_eq!(out.logo_brands.len(), 1);
        match &out.logo_brands[0] {
            LogoBrandRecord::ImageLogo { file, positioning, slide_number } => {
                assert_eq!(file, &out.image_files[0]);
                assert_eq!(positioning.top, Some(0.3));
                assert_eq!(*slide_number, 1);
            }
            other => panic!("expected image logo, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_large_or_centered_picture_is_not_logo() {
        let inspector = inspector();
        let big = Shape::picture(png(1)).with_geometry(inches(0.0, 0.2, 8.0, 5.0));
        let centered = Shape::picture(png(2)).with_geometry(inches(3.0, 3.0, 2.0, 1.5));
        let tiny = Shape::picture(png(3)).with_geometry(inches(0.0, 0.2, 0.3, 0.3));

        for shape in [big, centered, tiny] {
            let out = inspector.classify(&shape, 2, &mut NullImageStore);
            assert_eq!(out.image_files.len(), 1);
            assert!(out.logo_brands.is_empty());
        }
    }

    #[test]
    fn test_logo_image_without_top_uses_size_only() {
        let thresholds = LogoThresholds::default();
        let sized = Positioning {
            width: Some(1.0),
            height: Some(1.0),
            ..Default::default()
        };
        assert!(is_logo_image(&sized, &thresholds));

        let no_size = Positioning {
            top: Some(0.1),
            ..Default::default()
        };
        assert!(!is_logo_image(&no_size, &thresholds));
    }

    #[test]
    fn test_brand_text_is_text_logo() {
        let shape = Shape::text_box("© 2024 Acme Inc. All rights reserved")
            .with_geometry(inches(1.0, 3.0, 4.0, 1.0));
        let out = inspector().classify(&shape, 3, &mut NullImageStore);

        assert_eq!(out.text.as_slice(), ["© 2024 Acme Inc. All rights reserved"]);
        assert_eq!(out.text_shapes.len(), 1);
        assert!(matches!(
            out.logo_brands.as_slice(),
            [LogoBrandRecord::TextLogo { slide_number: 3, .. }]
        ));
    }

    #[test]
    fn test_text_position_bands() {
        let inspector = inspector();
        let header = Shape::text_box("Quarterly review").with_geometry(inches(1.0, 0.4, 4.0, 0.5));
        let body = Shape::text_box("Quarterly review").with_geometry(inches(1.0, 3.0, 4.0, 0.5));
        let footer = Shape::text_box("Quarterly review").with_geometry(inches(1.0, 6.8, 4.0, 0.5));
        let unplaced = Shape::text_box("Quarterly review");

        assert_eq!(inspector.classify(&header, 1, &mut NullImageStore).logo_brands.len(), 1);
        assert!(inspector.classify(&body, 1, &mut NullImageStore).logo_brands.is_empty());
        assert_eq!(inspector.classify(&footer, 1, &mut NullImageStore).logo_brands.len(), 1);
        assert!(inspector.classify(&unplaced, 1, &mut NullImageStore).logo_brands.is_empty());
    }

    #[test]
    fn test_text_is_trimmed_and_blank_text_ignored() {
        let inspector = inspector();
        let shape = Shape::text_box("  Agenda \n").with_geometry(inches(1.0, 3.0, 4.0, 1.0));
        let out = inspector.classify(&shape, 1, &mut NullImageStore);
        assert_eq!(out.text.as_slice(), ["Agenda"]);
        assert!(out.text_shapes[0].font_info.name.is_none());

        let blank = Shape::text_box("   ").with_placeholder(PlaceholderKind::Body);
        assert!(inspector.classify(&blank, 1, &mut NullImageStore).is_empty());
    }

    #[test]
    fn test_auto_shape_and_freeform_are_graphic_elements() {
        let inspector = inspector();
        let mut rect = Shape::new(ShapeKind::AutoShape {
            preset: Some("roundRect".to_string()),
        })
        .with_geometry(inches(1.0, 2.0, 3.0, 1.0));
        rect.fill = Some("FF0000".to_string());
        let out = inspector.classify(&rect, 4, &mut NullImageStore);
        assert_eq!(out.graphic_elements.len(), 1);
        let record = &out.graphic_elements[0];
        assert_eq!(record.shape_type, "auto_shape");
        assert_eq!(record.auto_shape_type.as_deref(), Some("roundRect"));
        assert_eq!(record.fill_color.as_deref(), Some("FF0000"));
        assert_eq!(record.positioning.width, Some(3.0));
        assert_eq!(record.text, None);
        assert!(out.text.is_empty());

        let freeform = Shape::new(ShapeKind::Freeform);
        let out = inspector.classify(&freeform, 4, &mut NullImageStore);
        assert_eq!(out.graphic_elements[0].shape_type, "freeform");
        assert_eq!(out.graphic_elements[0].auto_shape_type, None);
        assert_eq!(out.graphic_elements[0].positioning, Positioning::default());
    }

    #[test]
    fn test_auto_shape_with_text_takes_text_branch() {
        let shape = Shape::new(ShapeKind::AutoShape {
            preset: Some("rect".to_string()),
        })
        .with_text("Overview")
        .with_geometry(inches(1.0, 3.0, 3.0, 1.0));
        let out = inspector().classify(&shape, 1, &mut NullImageStore);
        assert_eq!(out.text.as_slice(), ["Overview"]);
        assert!(out.graphic_elements.is_empty());
    }

    #[test]
    fn test_other_kinds_contribute_nothing() {
        let inspector = inspector();
        for kind in [ShapeKind::GraphicFrame, ShapeKind::Connector, ShapeKind::Other] {
            assert!(inspector.classify(&Shape::new(kind), 1, &mut NullImageStore).is_empty());
        }
    }

    #[test]
    fn test_persist_failure_still_records_name() {
        let image = png(9);
        let shape = Shape::picture(image.clone());
        let out = inspector().classify(&shape, 7, &mut FailingStore);
        assert_eq!(
            out.image_files.as_slice(),
            [image_file_name(&image.blob, &image.content_type, 7)]
        );
    }
}
