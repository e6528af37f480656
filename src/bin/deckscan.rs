//! deckscan command-line tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use deckscan::batch::process_directory;
use deckscan::export::{export_csv, export_json};
use deckscan::images::FsImageStore;
use deckscan::inspect::{CustomTags, Inspector, InspectorConfig, SummaryReport};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deckscan")]
#[command(version, about = "Inspect PowerPoint presentations: text, images, logos and compliance markers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse one presentation
    Inspect {
        /// Presentation file (.pptx or .pptm)
        file: PathBuf,

        /// Output directory for exports
        #[arg(short, long, default_value = "exports")]
        output_dir: PathBuf,

        /// Directory for extracted images
        #[arg(short, long, default_value = "images")]
        image_dir: PathBuf,

        /// JSON file with custom tags
        #[arg(short, long)]
        tags_file: Option<PathBuf>,

        /// Export format(s)
        #[arg(short = 'f', long, value_enum, default_values_t = [ExportFormat::Json])]
        export_format: Vec<ExportFormat>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Analyse every presentation in a directory
    Batch {
        directory: PathBuf,

        /// Output directory for batch exports
        #[arg(short, long, default_value = "batch_exports")]
        output_dir: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
    Both,
}

fn load_config(path: Option<&Path>) -> Result<InspectorConfig> {
    match path {
        Some(path) => InspectorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(InspectorConfig::default()),
    }
}

fn inspect(
    file: &Path,
    output_dir: &Path,
    image_dir: &Path,
    tags_file: Option<&Path>,
    formats: &[ExportFormat],
    config: InspectorConfig,
) -> Result<()> {
    let inspector = Inspector::new(config)?;
    let mut images = FsImageStore::create(image_dir)
        .with_context(|| format!("failed to create {}", image_dir.display()))?;

    let mut analysis = inspector
        .inspect_path(file, &mut images)
        .with_context(|| format!("failed to inspect {}", file.display()))?;

    if let Some(tags_file) = tags_file {
        let custom = CustomTags::load(tags_file)
            .with_context(|| format!("failed to read tags {}", tags_file.display()))?;
        analysis.apply_custom_tags(&custom);
    }

    let wants = |format: ExportFormat| {
        formats
            .iter()
            .any(|f| *f == format || *f == ExportFormat::Both)
    };
    if wants(ExportFormat::Json) {
        let path = export_json(&analysis, output_dir, None)?;
        println!("JSON export: {}", path.display());
    }
    if wants(ExportFormat::Csv) {
        let path = export_csv(&analysis, output_dir, None)?;
        println!("CSV export: {}", path.display());
    }

    let summary = SummaryReport::from_analysis(&analysis);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Inspect {
            file,
            output_dir,
            image_dir,
            tags_file,
            export_format,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            inspect(
                &file,
                &output_dir,
                &image_dir,
                tags_file.as_deref(),
                &export_format,
                config,
            )
        }
        Command::Batch {
            directory,
            output_dir,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let report = process_directory(&directory, &output_dir, &config)
                .with_context(|| format!("failed to process {}", directory.display()))?;
            info!(
                processed = report.processed_files.len(),
                failed = report.failed_files.len(),
                "batch finished"
            );
            println!("{}", serde_json::to_string_pretty(&report.summary)?);
            Ok(())
        }
    }
}
