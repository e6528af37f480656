//! Writing analysis results to disk.
//!
//! - `json`: the full analysis, every record field included
//! - `csv`: one row per slide with list fields joined by `" | "`

pub mod csv;
pub mod json;

pub use csv::{CsvSlideRow, LIST_SEPARATOR, export_csv, read_rows, write_slides};
pub use json::{INSPECTOR_VERSION, JsonExport, export_json, write_json};

use chrono::{DateTime, Local};
use std::path::Path;

/// `<stem>_<kind>_<YYYYmmdd_HHMMSS>.<ext>`, where `stem` is the document
/// file name without its extension.
pub fn timestamped_file_name(document: &str, kind: &str, ext: &str, at: DateTime<Local>) -> String {
    let stem = Path::new(document)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "presentation".to_string());
    format!("{}_{}_{}.{}", stem, kind, at.format("%Y%m%d_%H%M%S"), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamped_file_name() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            timestamped_file_name("Q3 deck.pptx", "analysis", "json", at),
            "Q3 deck_analysis_20240309_140507.json"
        );
        assert_eq!(
            timestamped_file_name("", "slides", "csv", at),
            "presentation_slides_20240309_140507.csv"
        );
    }
}
