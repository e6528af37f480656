//! Document-level aggregation.

use super::config::InspectorConfig;
use super::custom_tags::CustomTags;
use super::patterns::PatternSet;
use super::records::{DocumentMetadata, SlideRecord};
use crate::common::Result;
use crate::images::ImageStore;
use crate::presentation::{Presentation, Shape, Slide};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Runs the analysis. Holds the compiled pattern lists, so build it once
/// and reuse it across documents.
#[derive(Debug, Clone)]
pub struct Inspector {
    pub(crate) config: InspectorConfig,
    pub(crate) copyright: PatternSet,
    pub(crate) confidentiality: PatternSet,
    pub(crate) company: PatternSet,
    pub(crate) brand: PatternSet,
}

/// Result of analysing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub metadata: DocumentMetadata,
    pub slides: Vec<SlideRecord>,
}

impl Inspector {
    pub fn new(config: InspectorConfig) -> Result<Self> {
        Ok(Self {
            copyright: PatternSet::new(&config.copyright_patterns)?,
            confidentiality: PatternSet::new(&config.confidentiality_patterns)?,
            company: PatternSet::new(&config.company_patterns)?,
            brand: PatternSet::new(&config.brand_indicators)?,
            config,
        })
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Analyse every slide of `pres` in order and compute document facts.
    pub fn analyze_document(&self, pres: &Presentation, images: &mut dyn ImageStore) -> Analysis {
        let slides: Vec<SlideRecord> = pres
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| self.analyze_slide(slide, index + 1, images))
            .collect();

        let total_images: usize = pres.slides.iter().map(Slide::picture_count).sum();
        debug_assert_eq!(
            total_images,
            slides.iter().map(|s| s.image_count).sum::<usize>()
        );

        let all_text = document_text(pres);
        let props = &pres.properties;
        let metadata = DocumentMetadata {
            filename: pres.file_name.clone().unwrap_or_default(),
            file_size: pres.file_size,
            created: props.created,
            modified: props.modified,
            author: props.author.clone(),
            title: props.title.clone(),
            subject: props.subject.clone(),
            category: props.category.clone(),
            comments: props.comments.clone(),
            slide_count: pres.slides.len(),
            total_images,
            company_mentions: self.company.find_matches(&all_text),
            copyright_notices: self.copyright.find_matches(&all_text),
            confidentiality_labels: self.confidentiality.find_matches(&all_text),
            custom_tags: Vec::new(),
        };

        debug!(
            slides = metadata.slide_count,
            images = metadata.total_images,
            "analysed document"
        );
        Analysis { metadata, slides }
    }

    /// Open `path` and analyse it. Load failures are returned as errors;
    /// everything after loading degrades instead of failing.
    pub fn inspect_path<P: AsRef<Path>>(
        &self,
        path: P,
        images: &mut dyn ImageStore,
    ) -> Result<Analysis> {
        let path = path.as_ref();
        let pres = Presentation::open(path)?;
        let analysis = self.analyze_document(&pres, images);
        info!(
            path = %path.display(),
            slides = analysis.metadata.slide_count,
            images = analysis.metadata.total_images,
            "inspection complete"
        );
        Ok(analysis)
    }
}

impl Analysis {
    /// Append externally supplied tags: the `document` entry to the
    /// document's custom tags and each `slide_<n>` entry to slide `n`.
    pub fn apply_custom_tags(&mut self, custom: &CustomTags) {
        self.metadata
            .custom_tags
            .extend(custom.document().iter().cloned());
        for slide in &mut self.slides {
            slide
                .tags
                .extend(custom.for_slide(slide.slide_number).iter().cloned());
        }
    }
}

/// Text of every shape on every slide, nested ones included, space-joined
/// and lower-cased.
fn document_text(pres: &Presentation) -> String {
    pres.slides
        .iter()
        .flat_map(|slide| slide.shapes.iter().flat_map(Shape::iter_tree))
        .filter_map(Shape::text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
