//! Records produced by an analysis run.
//!
//! All of them serialize with serde; field names are the ones written to
//! the JSON export.

use crate::presentation::{Geometry, RunFont};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bounding box in inches. Each value is present only if the shape's
/// transform, or for placeholders its layout or master, carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Positioning {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl From<&Geometry> for Positioning {
    fn from(geometry: &Geometry) -> Self {
        Self {
            left: geometry.left_in(),
            top: geometry.top_in(),
            width: geometry.width_in(),
            height: geometry.height_in(),
        }
    }
}

/// Font of the first run of a text shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    pub name: Option<String>,
    /// Points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// `RRGGBB`
    pub color: Option<String>,
}

impl From<&RunFont> for FontInfo {
    fn from(font: &RunFont) -> Self {
        Self {
            name: font.name.clone(),
            size: font.size,
            bold: font.bold,
            italic: font.italic,
            color: font.color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShapeRecord {
    pub text: String,
    pub font_info: FontInfo,
    pub positioning: Positioning,
    pub slide_number: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicElementRecord {
    /// `auto_shape` or `freeform`
    pub shape_type: String,
    /// Preset geometry name such as `rect` or `roundRect`
    pub auto_shape_type: Option<String>,
    pub positioning: Positioning,
    pub fill_color: Option<String>,
    pub text: Option<String>,
    pub slide_number: usize,
}

/// A shape believed to be a logo or brand mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogoBrandRecord {
    TextLogo {
        content: String,
        font_info: FontInfo,
        positioning: Positioning,
        slide_number: usize,
    },
    ImageLogo {
        file: String,
        positioning: Positioning,
        slide_number: usize,
    },
}

impl LogoBrandRecord {
    pub fn slide_number(&self) -> usize {
        match self {
            LogoBrandRecord::TextLogo { slide_number, .. }
            | LogoBrandRecord::ImageLogo { slide_number, .. } => *slide_number,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, LogoBrandRecord::ImageLogo { .. })
    }
}

/// Everything extracted from one slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// 1-based
    pub slide_number: usize,
    pub title: Option<String>,
    /// Shape texts in traversal order
    pub text_content: Vec<String>,
    /// Top-level shapes; a group counts once
    pub shape_count: usize,
    pub image_count: usize,
    pub image_files: Vec<String>,
    pub text_shapes: Vec<TextShapeRecord>,
    pub graphic_elements: Vec<GraphicElementRecord>,
    pub logos_and_brands: Vec<LogoBrandRecord>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

/// Document-level facts and pattern matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub filename: String,
    /// Bytes
    pub file_size: u64,
    #[serde(rename = "created_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "modified_date")]
    pub modified: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub subject: Option<String>,
    pub category: Option<String>,
    pub comments: Option<String>,
    pub slide_count: usize,
    pub total_images: usize,
    pub company_mentions: Vec<String>,
    pub copyright_notices: Vec<String>,
    pub confidentiality_labels: Vec<String>,
    pub custom_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::EMUS_PER_INCH;

    #[test]
    fn test_positioning_from_partial_geometry() {
        let geometry = Geometry {
            top: Some(EMUS_PER_INCH / 2),
            width: Some(EMUS_PER_INCH * 2),
            ..Default::default()
        };
        let pos = Positioning::from(&geometry);
        assert_eq!(pos.top, Some(0.5));
        assert_eq!(pos.width, Some(2.0));
        assert_eq!(pos.left, None);
        assert_eq!(pos.height, None);
    }

    #[test]
    fn test_logo_record_is_tagged() {
        let record = LogoBrandRecord::ImageLogo {
            file: "slide_01_0badcafe.png".to_string(),
            positioning: Positioning::default(),
            slide_number: 1,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "image_logo");
        assert_eq!(json["file"], "slide_01_0badcafe.png");
        assert_eq!(record.slide_number(), 1);
        assert!(record.is_image());
    }
}
