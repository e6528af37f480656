//! Inspector configuration.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! company_patterns: ["inc.", "gmbh"]
//! logo:
//!   image_max_in: 3.0
//! ```

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Size and position thresholds for logo detection, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoThresholds {
    /// Text above this top edge sits in the header band
    pub text_top_max_in: f64,
    /// Text below this top edge sits in the footer band
    pub text_bottom_min_in: f64,
    /// Pictures must be narrower and shorter than this
    pub image_max_in: f64,
    /// Pictures must be wider or taller than this
    pub image_min_in: f64,
    /// Pictures above this top edge sit in the header band
    pub image_top_max_in: f64,
    /// Pictures below this top edge sit in the footer band
    pub image_bottom_min_in: f64,
}

impl Default for LogoThresholds {
    fn default() -> Self {
        Self {
            text_top_max_in: 1.0,
            text_bottom_min_in: 6.0,
            image_max_in: 4.0,
            image_min_in: 0.5,
            image_top_max_in: 2.0,
            image_bottom_min_in: 6.0,
        }
    }
}

/// Pattern lists and heuristics used by the inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    pub copyright_patterns: Vec<String>,
    pub confidentiality_patterns: Vec<String>,
    pub company_patterns: Vec<String>,
    /// Words that mark a text shape as brand text
    pub brand_indicators: Vec<String>,
    pub logo: LogoThresholds,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            copyright_patterns: strings(&["©", "copyright", "(c)", "all rights reserved"]),
            confidentiality_patterns: strings(&[
                "confidential",
                "proprietary",
                "internal",
                "restricted",
                "private",
                "not for distribution",
                "do not distribute",
                "internal use only",
            ]),
            company_patterns: strings(&[
                "inc.",
                "llc",
                "corp.",
                "corporation",
                "ltd.",
                "limited",
                "company",
            ]),
            brand_indicators: strings(&[
                "garden",
                "giving",
                "company",
                "corp",
                "inc",
                "llc",
                "ltd",
                "©",
                "copyright",
                "trademark",
                "™",
                "®",
                "all rights reserved",
            ]),
            logo: LogoThresholds::default(),
        }
    }
}

impl InspectorConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a YAML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "company_patterns: [\"gmbh\"]\nlogo:\n  image_max_in: 3.0\n";
        let config = InspectorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.company_patterns, vec!["gmbh".to_string()]);
        assert_eq!(config.logo.image_max_in, 3.0);
        assert_eq!(config.logo.image_min_in, 0.5);
        assert_eq!(config.copyright_patterns, InspectorConfig::default().copyright_patterns);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(InspectorConfig::from_yaml_str("  \n").unwrap(), InspectorConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = InspectorConfig::from_yaml_str("logo: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inspector.yaml");
        std::fs::write(&path, "brand_indicators: [acme]\n").unwrap();
        let config = InspectorConfig::load(&path).unwrap();
        assert_eq!(config.brand_indicators, vec!["acme".to_string()]);

        assert!(InspectorConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
