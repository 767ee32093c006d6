//! CLI application for GST tax invoice generation.

mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{batch, calc, config, process};

/// GST bill generator - Build tax invoices from loan-disbursement documents
#[derive(Parser)]
#[command(name = "gstbill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a bill from a single document
    Process(process::ProcessArgs),

    /// Build bills from multiple documents
    Batch(batch::BatchArgs),

    /// Compute the GST breakdown of an amount
    Tax(calc::TaxArgs),

    /// Write an amount in Indian-grouping words
    Words(calc::WordsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Tax(args) => calc::run_tax(args).await,
        Commands::Words(args) => calc::run_words(args).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
