//! Condensed report of an analysis.

use super::document::Analysis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    /// Megabytes, two decimal places
    pub size_mb: f64,
    pub slide_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub total_text_items: usize,
    pub total_images: usize,
    pub slides_with_images: usize,
    /// Sorted
    pub unique_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub has_copyright: bool,
    pub has_confidentiality: bool,
    pub company_mentions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub file_info: FileInfo,
    pub content_analysis: ContentAnalysis,
    pub compliance_check: ComplianceCheck,
}

impl SummaryReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let meta = &analysis.metadata;
        let unique_tags: BTreeSet<&str> = analysis
            .slides
            .iter()
            .flat_map(|slide| slide.tags.iter().map(String::as_str))
            .collect();

        Self {
            file_info: FileInfo {
                name: meta.filename.clone(),
                size_mb: (meta.file_size as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0,
                slide_count: meta.slide_count,
            },
            content_analysis: ContentAnalysis {
                total_text_items: analysis.slides.iter().map(|s| s.text_content.len()).sum(),
                total_images: meta.total_images,
                slides_with_images: analysis.slides.iter().filter(|s| s.image_count > 0).count(),
                unique_tags: unique_tags.into_iter().map(str::to_string).collect(),
            },
            compliance_check: ComplianceCheck {
                has_copyright: !meta.copyright_notices.is_empty(),
                has_confidentiality: !meta.confidentiality_labels.is_empty(),
                company_mentions: meta.company_mentions.clone(),
            },
        }
    }
}
