//! Tax and words commands - run a single stage on a typed-in amount.

use std::str::FromStr;

use clap::Args;
use console::style;
use rust_decimal::Decimal;

use gstbill_core::{amount_in_words, compute_tax, format_inr};

/// Arguments for the tax command.
#[derive(Args)]
pub struct TaxArgs {
    /// Tax-inclusive amount
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Asset category; "AIR CONDITIONER" selects the 28% rate
    #[arg(long, default_value = "")]
    category: String,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the words command.
#[derive(Args)]
pub struct WordsArgs {
    /// Amount in rupees
    #[arg(allow_hyphen_values = true)]
    amount: String,
}

fn parse_amount(input: &str) -> anyhow::Result<Decimal> {
    let cleaned: String = input.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(cleaned.trim())
        .map_err(|e| anyhow::anyhow!("Invalid amount {:?}: {}", input, e))
}

pub async fn run_tax(args: TaxArgs) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount)?;
    if amount.is_sign_negative() {
        anyhow::bail!("Amount must not be negative: {}", args.amount);
    }

    let tax = compute_tax(amount, &args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tax)?);
        return Ok(());
    }

    let half_rate = tax.tax_rate_percent;
    println!("Gross amount:   {:>14}", format_inr(amount));
    println!("GST rate:       {:>13}%", half_rate * 2);
    println!("Net rate:       {:>14}", format_inr(tax.net_rate));
    println!("CGST @ {:>2}%:    {:>14}", half_rate, format_inr(tax.cgst));
    println!("SGST @ {:>2}%:    {:>14}", half_rate, format_inr(tax.sgst));
    println!("Taxable value:  {:>14}", format_inr(tax.taxable_value));
    println!("Total tax:      {:>14}", format_inr(tax.total_tax));

    Ok(())
}

pub async fn run_words(args: WordsArgs) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount)?;
    let words = amount_in_words(amount);

    if words.is_empty() {
        eprintln!(
            "{} {} cannot be written in words",
            style("✗").red(),
            args.amount
        );
        anyhow::bail!("Unprintable amount: {}", args.amount);
    }

    println!("{}", words);
    Ok(())
}
