//! Case-insensitive substring matching of configured patterns.

use crate::common::{Error, Result};
use aho_corasick::AhoCorasick;

/// A compiled list of patterns.
///
/// Patterns and input are both lower-cased, then every pattern is searched
/// as a plain substring. Blank patterns are dropped.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    automaton: AhoCorasick,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut kept: Vec<String> = Vec::with_capacity(patterns.len());
        for pattern in patterns.iter().map(AsRef::as_ref) {
            if !pattern.is_empty() && !kept.iter().any(|p| p == pattern) {
                kept.push(pattern.to_string());
            }
        }

        let automaton = AhoCorasick::new(kept.iter().map(|p| p.to_lowercase()))
            .map_err(|e| Error::Config(format!("invalid pattern list: {}", e)))?;
        Ok(Self {
            patterns: kept,
            automaton,
        })
    }

    /// The distinct patterns found in `text`, in configuration order.
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut found = vec![false; self.patterns.len()];
        for m in self.automaton.find_overlapping_iter(&lowered) {
            found[m.pattern().as_usize()] = true;
        }
        self.patterns
            .iter()
            .zip(found)
            .filter_map(|(pattern, hit)| hit.then(|| pattern.clone()))
            .collect()
    }

    /// Whether any pattern occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.automaton.is_match(&text.to_lowercase())
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// One-shot form of [`PatternSet::find_matches`].
///
/// Never fails: if the automaton cannot be built the result is empty.
pub fn find_matches<S: AsRef<str>>(text: &str, patterns: &[S]) -> Vec<String> {
    PatternSet::new(patterns)
        .map(|set| set.find_matches(text))
        .unwrap_or_default()
}
