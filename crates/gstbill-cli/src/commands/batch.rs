//! Batch processing command for multiple bill documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use gstbill_core::{BillPipeline, BillRecord};

use super::{decode_pages, load_config, TemplateArg};
use crate::render::{format_record, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of documents decoded concurrently
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Force a template instead of classifying each document
    #[arg(short, long, value_enum)]
    template: Option<TemplateArg>,

    /// Number invoices sequentially starting from this value
    #[arg(long)]
    invoice_start: Option<u64>,

    /// Prefix for sequential invoice numbers
    #[arg(long, default_value = "")]
    invoice_prefix: String,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    record: Option<BillRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
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

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut pipeline = BillPipeline::from_config(&config);
    if let Some(template) = args.template {
        pipeline = pipeline.with_template(template.into());
    }

    // Decoding runs on the blocking pool, `jobs` documents at a time. Results
    // come back in input order so invoice numbers follow the sorted file list.
    let jobs = args.jobs.max(1);
    let mut decoded = stream::iter(files)
        .map(|path| {
            let pdf = config.pdf.clone();
            async move {
                let file_start = Instant::now();
                let pages = decode_pages(path.clone(), pdf).await;
                (path, pages, file_start)
            }
        })
        .buffered(jobs);

    let mut results = Vec::new();
    while let Some((path, pages, file_start)) = decoded.next().await {
        let sequence = results.len() as u64;

        match pages {
            Ok(pages) => {
                let mut file_pipeline = pipeline.clone();
                if let Some(first) = args.invoice_start {
                    file_pipeline = file_pipeline
                        .with_invoice_number(format!("{}{}", args.invoice_prefix, first + sequence));
                }

                let record = file_pipeline.run(&pages);
                results.push(ProcessResult {
                    path,
                    record: Some(record),
                    error: None,
                    processing_time_ms: file_start.elapsed().as_millis() as u64,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        record: None,
                        error: Some(error_msg),
                        processing_time_ms: file_start.elapsed().as_millis() as u64,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.record.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(record) = &result.record {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("bill");

                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));
                fs::write(&output_path, format_record(record, args.format, &config)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "invoice_number",
        "template",
        "customer_name",
        "asset_cost",
        "total_tax",
        "missing_fields",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        let row = match &result.record {
            Some(record) => [
                filename,
                "success".to_string(),
                record.invoice_number.clone().unwrap_or_default(),
                record.template.name().to_string(),
                record.fields.customer_name.clone(),
                record.fields.asset_cost.to_string(),
                record.tax.total_tax.to_string(),
                record
                    .metadata
                    .missing_fields
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join(";"),
                result.processing_time_ms.to_string(),
                String::new(),
            ],
            None => [
                filename,
                "error".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                result.processing_time_ms.to_string(),
                result.error.clone().unwrap_or_default(),
            ],
        };

        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
