//! Process command - build a bill from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use gstbill_core::BillPipeline;

use super::{decode_pages, load_config, TemplateArg};
use crate::render::{format_record, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Force a template instead of classifying the document
    #[arg(short, long, value_enum)]
    template: Option<TemplateArg>,

    /// Invoice number printed on the bill
    #[arg(short = 'n', long)]
    invoice_number: Option<String>,

    /// Show extraction warnings and timing
    #[arg(long)]
    show_warnings: bool,

    /// Validate extracted data
    #[arg(long)]
    validate: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Decoding document...");
    pb.set_position(10);

    let pages = decode_pages(args.input.clone(), config.pdf.clone()).await?;
    debug!("Decoded {} pages", pages.len());

    let text_length: usize = pages.iter().map(|p| p.trim().len()).sum();
    if text_length < config.pdf.min_text_length {
        warn!(
            "Document has only {} characters of text, extraction may be incomplete",
            text_length
        );
    }

    pb.set_message("Extracting fields...");
    pb.set_position(60);

    let mut pipeline = BillPipeline::from_config(&config);
    if let Some(template) = args.template {
        pipeline = pipeline.with_template(template.into());
    }
    if let Some(invoice_number) = &args.invoice_number {
        pipeline = pipeline.with_invoice_number(invoice_number.as_str());
    }

    let record = pipeline.run(&pages);

    pb.set_position(100);
    pb.finish_and_clear();

    if args.validate {
        let issues = record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_record(&record, args.format, &config)?;

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

    if args.show_warnings {
        eprintln!();
        eprintln!(
            "{} Template: {}",
            style("ℹ").blue(),
            record.template
        );
        for warning in &record.metadata.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
        if let Some(time_ms) = record.metadata.processing_time_ms {
            eprintln!("{} Processing time: {}ms", style("ℹ").blue(), time_ms);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
