//! Batch command - process many revision PDFs into one merge table.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use direv_core::models::config::DirevConfig;
use direv_core::models::row::{MergeRow, MERGE_HEADERS};
use direv_core::revision::{RevisionParser, RevisionPipeline};

use crate::table::load_reference;

use super::process::extract_document;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Reference table (CSV or spreadsheet) for enrichment
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Output file for the merge table (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: MergeFormat,

    /// Abort on the first per-file failure instead of continuing
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum MergeFormat {
    /// Positional CSV with the merge headers
    Csv,
    /// JSON array of rows
    Json,
}

/// A per-file failure recorded during the run.
struct FailedFile {
    path: PathBuf,
    error: String,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DirevConfig::from_file(std::path::Path::new(path))?
    } else {
        DirevConfig::default()
    };

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let mut pipeline = RevisionPipeline::new(RevisionParser::from_config(&config.extraction));
    if let Some(reference_path) = &args.reference {
        let table = load_reference(reference_path)?;
        println!(
            "{} Loaded reference table with {} rows",
            style("ℹ").blue(),
            table.len()
        );
        pipeline = pipeline.with_reference(table);
    }

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut rows: Vec<MergeRow> = Vec::with_capacity(files.len());
    let mut failed: Vec<FailedFile> = Vec::new();

    for path in &files {
        match extract_document(path, &config, &mut pipeline) {
            Ok(document) => {
                for warning in &document.warnings {
                    warn!("{}: {}", path.display(), warning);
                }
                rows.push(document.row);
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.strict {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                failed.push(FailedFile {
                    path: path.clone(),
                    error: error_msg,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write the merge table
    let content = match args.format {
        MergeFormat::Csv => format_merge_csv(&rows)?,
        MergeFormat::Json => serde_json::to_string_pretty(&rows)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, content)?;
        println!(
            "{} Merge table written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(rows.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in &failed {
            println!("  - {}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(())
}

fn format_merge_csv(rows: &[MergeRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(MERGE_HEADERS)?;
    for row in rows {
        wtr.write_record(&row.to_record())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
