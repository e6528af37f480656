//! JSON export.

use super::timestamped_file_name;
use crate::common::Result;
use crate::inspect::{Analysis, DocumentMetadata, SlideRecord};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const INSPECTOR_VERSION: &str = "1.0.0";

/// Top-level JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonExport {
    pub metadata: DocumentMetadata,
    pub slides: Vec<SlideRecord>,
    pub analysis_timestamp: DateTime<Utc>,
    pub inspector_version: String,
}

impl JsonExport {
    pub fn new(analysis: &Analysis, at: DateTime<Utc>) -> Self {
        Self {
            metadata: analysis.metadata.clone(),
            slides: analysis.slides.clone(),
            analysis_timestamp: at,
            inspector_version: INSPECTOR_VERSION.to_string(),
        }
    }
}

/// Pretty-print `analysis` to `writer`.
pub fn write_json<W: Write>(analysis: &Analysis, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonExport::new(analysis, Utc::now()))?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write `analysis` into `dir`, creating it if needed. Without a file name
/// one is derived from the document name and the current time.
pub fn export_json(analysis: &Analysis, dir: &Path, file_name: Option<&str>) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name.map(str::to_string).unwrap_or_else(|| {
        timestamped_file_name(&analysis.metadata.filename, "analysis", "json", Local::now())
    }));

    let mut writer = BufWriter::new(File::create(&path)?);
    write_json(analysis, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), "exported JSON");
    Ok(path)
}
