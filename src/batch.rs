//! Batch processing of a directory of presentations.
//!
//! Every `.pptx`/`.pptm`/`.ppt` file directly inside the input directory is
//! analysed on the rayon pool. Each document gets its own output folder:
//!
//! ```text
//! <output>/
//!   batch_summary.json
//!   <stem>/exports/<stem>_analysis_*.json
//!   <stem>/exports/<stem>_slides_*.csv
//!   <stem>/images/slide_NN_*.png
//! ```
//!
//! Files sharing a stem (`deck.pptx`, `deck.pptm`) get folders named after
//! the whole file name instead (`deck_pptx`, `deck_pptm`).
//!
//! A file that fails is recorded with its error and the rest carry on.
//! Legacy binary `.ppt` files cannot be read and always land in
//! `failed_files`.

use crate::common::{Error, Result};
use crate::export::{export_csv, export_json};
use crate::images::FsImageStore;
use crate::inspect::{Analysis, Inspector, InspectorConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

pub const SUMMARY_FILE_NAME: &str = "batch_summary.json";

const EXTENSIONS: [&str; 3] = ["pptx", "pptm", "ppt"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedFile {
    pub filename: String,
    pub slides: usize,
    pub images: usize,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub filename: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTotals {
    pub total_files: usize,
    pub total_slides: usize,
    pub total_images: usize,
    pub files_with_copyright: usize,
    pub files_with_confidentiality: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed_files: Vec<ProcessedFile>,
    pub failed_files: Vec<FailedFile>,
    pub summary: BatchTotals,
}

impl BatchReport {
    fn record(&mut self, outcome: std::result::Result<(ProcessedFile, Analysis), FailedFile>) {
        match outcome {
            Ok((processed, analysis)) => {
                let meta = &analysis.metadata;
                self.summary.total_slides += meta.slide_count;
                self.summary.total_images += meta.total_images;
                if !meta.copyright_notices.is_empty() {
                    self.summary.files_with_copyright += 1;
                }
                if !meta.confidentiality_labels.is_empty() {
                    self.summary.files_with_confidentiality += 1;
                }
                self.processed_files.push(processed);
            }
            Err(failed) => self.failed_files.push(failed),
        }
    }
}

/// Presentation files directly inside `dir`, sorted by file name.
pub fn find_presentations(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::FileNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Other(e.to_string()))?;
        let is_presentation = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)));
        if is_presentation {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Analyse and export every presentation in `dir`, then write
/// `batch_summary.json` into `output_dir`.
pub fn process_directory(dir: &Path, output_dir: &Path, config: &InspectorConfig) -> Result<BatchReport> {
    let files = find_presentations(dir)?;
    std::fs::create_dir_all(output_dir)?;
    let inspector = Inspector::new(config.clone())?;

    if files.is_empty() {
        warn!(dir = %dir.display(), "no presentation files found");
    }

    let outcomes: Vec<_> = files
        .par_iter()
        .zip(output_dirs(&files, output_dir))
        .map(|(path, file_dir)| process_file(&inspector, path, file_dir))
        .collect();

    let mut report = BatchReport {
        summary: BatchTotals {
            total_files: files.len(),
            ..Default::default()
        },
        ..Default::default()
    };
    for outcome in outcomes {
        report.record(outcome);
    }

    let summary_path = output_dir.join(SUMMARY_FILE_NAME);
    let mut writer = BufWriter::new(File::create(&summary_path)?);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()?;

    info!(
        processed = report.processed_files.len(),
        failed = report.failed_files.len(),
        slides = report.summary.total_slides,
        images = report.summary.total_images,
        summary = %summary_path.display(),
        "batch complete"
    );
    Ok(report)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output folder of each file, in the order of `files`. Stems are compared
/// case-insensitively.
fn output_dirs(files: &[PathBuf], output_dir: &Path) -> Vec<PathBuf> {
    let mut stems: HashMap<String, usize> = HashMap::new();
    for path in files {
        *stems.entry(file_stem(path).to_lowercase()).or_default() += 1;
    }

    files
        .iter()
        .map(|path| {
            let stem = file_stem(path);
            if stems.get(&stem.to_lowercase()).is_some_and(|&count| count > 1) {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().replace('.', "_"))
                    .unwrap_or(stem);
                output_dir.join(name)
            } else {
                output_dir.join(stem)
            }
        })
        .collect()
}

fn process_file(
    inspector: &Inspector,
    path: &Path,
    file_dir: PathBuf,
) -> std::result::Result<(ProcessedFile, Analysis), FailedFile> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let run = || -> Result<Analysis> {
        let mut images = FsImageStore::create(file_dir.join("images"))?;
        let analysis = inspector.inspect_path(path, &mut images)?;
        let exports = file_dir.join("exports");
        export_json(&analysis, &exports, None)?;
        export_csv(&analysis, &exports, None)?;
        Ok(analysis)
    };

    match run() {
        Ok(analysis) => Ok((
            ProcessedFile {
                filename,
                slides: analysis.metadata.slide_count,
                images: analysis.metadata.total_images,
                output_dir: file_dir,
            },
            analysis,
        )),
        Err(e) => {
            warn!(file = %filename, error = %e, "failed to process presentation");
            Err(FailedFile {
                filename,
                error: e.to_string(),
            })
        }
    }
}
