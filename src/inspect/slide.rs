//! Per-slide aggregation.

use super::records::SlideRecord;
use super::Inspector;
use crate::images::ImageStore;
use crate::presentation::Slide;

impl Inspector {
    /// Build the record for one slide. `slide_number` is 1-based.
    pub fn analyze_slide(
        &self,
        slide: &Slide,
        slide_number: usize,
        images: &mut dyn ImageStore,
    ) -> SlideRecord {
        let mut record = SlideRecord {
            slide_number,
            title: slide.title(),
            ..Default::default()
        };

        for shape in &slide.shapes {
            record.shape_count += 1;
            self.classify(shape, slide_number, images)
                .append_to(&mut record);
        }

        record.notes = slide
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);
        record.tags = self.generate_tags(&record.text_content, record.notes.as_deref());
        record
    }
}
