//! Document core properties.
//!
//! Format-independent view of the properties stored in `docProps/core.xml`.
//! The inspector copies these into its own `DocumentMetadata` record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard document properties of a presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub subject: Option<String>,
    /// `dc:creator`
    pub author: Option<String>,
    pub keywords: Option<String>,
    /// `dc:description`
    pub comments: Option<String>,
    pub category: Option<String>,
    /// `cp:lastModifiedBy`
    pub last_modified_by: Option<String>,
    /// `dcterms:created`
    pub created: Option<DateTime<Utc>>,
    /// `dcterms:modified`
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Whether any property is set.
    pub fn has_data(&self) -> bool {
        self.title.is_some()
            || self.subject.is_some()
            || self.author.is_some()
            || self.keywords.is_some()
            || self.comments.is_some()
            || self.category.is_some()
            || self.last_modified_by.is_some()
            || self.created.is_some()
            || self.modified.is_some()
    }
}
