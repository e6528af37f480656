//! Slide tags derived from text content.

use super::Inspector;
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// Fixed content keywords, grouped by the tag they produce.
const KEYWORD_TAGS: [(&str, &str); 6] = [
    ("agenda", "agenda"),
    ("introduction", "introduction"),
    ("overview", "introduction"),
    ("conclusion", "conclusion"),
    ("summary", "conclusion"),
    ("thank you", "conclusion"),
];

static KEYWORDS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(KEYWORD_TAGS.iter().map(|(keyword, _)| keyword))
        .expect("Failed to build keyword matcher")
});

pub const TAG_COPYRIGHT: &str = "copyright";
pub const TAG_CONFIDENTIAL: &str = "confidential";
pub const TAG_COMPANY_INFO: &str = "company_info";
pub const TAG_AGENDA: &str = "agenda";
pub const TAG_INTRODUCTION: &str = "introduction";
pub const TAG_CONCLUSION: &str = "conclusion";

impl Inspector {
    /// Tags for a slide, from its extracted text and notes.
    ///
    /// Rules fire in a fixed order (copyright, confidential, company_info,
    /// agenda, introduction, conclusion) and each fires at most once.
    pub fn generate_tags(&self, text_content: &[String], notes: Option<&str>) -> Vec<String> {
        let mut parts: Vec<&str> = text_content.iter().map(String::as_str).collect();
        parts.extend(notes.filter(|n| !n.is_empty()));
        let all_text = parts.join(" ").to_lowercase();

        let mut tags = Vec::new();
        if self.copyright.is_match(&all_text) {
            tags.push(TAG_COPYRIGHT.to_string());
        }
        if self.confidentiality.is_match(&all_text) {
            tags.push(TAG_CONFIDENTIAL.to_string());
        }
        if self.company.is_match(&all_text) {
            tags.push(TAG_COMPANY_INFO.to_string());
        }

        let mut hits = [false; 3];
        for m in KEYWORDS.find_overlapping_iter(&all_text) {
            match KEYWORD_TAGS[m.pattern().as_usize()].1 {
                TAG_AGENDA => hits[0] = true,
                TAG_INTRODUCTION => hits[1] = true,
                _ => hits[2] = true,
            }
        }
        for (hit, tag) in hits.into_iter().zip([TAG_AGENDA, TAG_INTRODUCTION, TAG_CONCLUSION]) {
            if hit {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}
