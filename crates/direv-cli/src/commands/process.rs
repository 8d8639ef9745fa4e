//! Process command - extract one merge row from a single revision PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use direv_core::models::config::DirevConfig;
use direv_core::models::row::{MergeRow, MERGE_HEADERS};
use direv_core::pdf::{PdfExtractor, PdfProcessor};
use direv_core::revision::{ProcessedDocument, RevisionParser, RevisionPipeline};

use crate::table::load_reference;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Reference table (CSV or spreadsheet) for enrichment
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (header + one record)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DirevConfig::from_file(std::path::Path::new(path))?
    } else {
        DirevConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    // An explicitly requested reference table that fails to load is an
    // error; a missing flag just disables enrichment.
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

    let document = extract_document(&args.input, &config, &mut pipeline)?;

    if !document.warnings.is_empty() {
        for warning in &document.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    // Format output
    let output = format_row(&document.row, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a PDF, extract its page texts, and run the pipeline on them.
pub fn extract_document(
    path: &std::path::Path,
    config: &DirevConfig,
    pipeline: &mut RevisionPipeline,
) -> anyhow::Result<ProcessedDocument> {
    let data = fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    debug!("PDF has {} pages", extractor.page_count());

    let mut pages = extractor.extract_pages()?;
    if config.pdf.max_pages > 0 && pages.len() > config.pdf.max_pages {
        pages.truncate(config.pdf.max_pages);
    }

    let text = direv_core::pdf::concat_page_texts(&pages);
    if text.trim().len() < config.pdf.min_text_length {
        anyhow::bail!(
            "No usable text extracted from {} ({} chars, minimum {})",
            path.display(),
            text.trim().len(),
            config.pdf.min_text_length
        );
    }

    Ok(pipeline.process_text(&text))
}

/// Format one row in the requested output format.
pub fn format_row(row: &MergeRow, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(row)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(MERGE_HEADERS)?;
            wtr.write_record(&row.to_record())?;
            let data = String::from_utf8(wtr.into_inner()?)?;
            Ok(data)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for (header, cell) in MERGE_HEADERS.iter().zip(row.to_record()) {
                output.push_str(&format!("{}: {}\n", header, cell));
            }
            Ok(output)
        }
    }
}
