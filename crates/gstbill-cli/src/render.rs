//! Output formatting for bill records.

use gstbill_core::models::config::GstbillConfig;
use gstbill_core::{format_inr, BillRecord};

/// Column at which long addresses wrap in the text invoice.
const WRAP_WIDTH: usize = 100;

const DECLARATION: &str = "We declare that this invoice shows the actual price of the goods \
described and that all particulars are true and correct.";

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text tax invoice
    Text,
}

impl OutputFormat {
    /// File extension for batch outputs.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_record(
    record: &BillRecord,
    format: OutputFormat,
    config: &GstbillConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record, config)),
    }
}

fn format_csv(record: &BillRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "invoice_number",
        "template",
        "customer_name",
        "customer_address",
        "manufacturer",
        "asset_category",
        "model",
        "serial_number",
        "asset_cost",
        "net_rate",
        "cgst",
        "sgst",
        "taxable_value",
        "tax_rate_percent",
        "total_tax",
        "amount_in_words",
        "tax_amount_in_words",
        "extracted_at",
    ])?;

    let fields = &record.fields;
    let tax = &record.tax;
    wtr.write_record([
        record.invoice_number.clone().unwrap_or_default(),
        record.template.name().to_string(),
        fields.customer_name.clone(),
        fields.customer_address.clone(),
        fields.manufacturer.clone(),
        fields.asset_category.clone(),
        fields.model.clone(),
        fields.serial_number.clone(),
        fields.asset_cost.to_string(),
        tax.net_rate.to_string(),
        tax.cgst.to_string(),
        tax.sgst.to_string(),
        tax.taxable_value.to_string(),
        tax.tax_rate_percent.to_string(),
        tax.total_tax.to_string(),
        record.amount_in_words.clone(),
        record.tax_amount_in_words.clone(),
        fields.extracted_at.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Render the bill as a plain-text tax invoice.
pub fn format_text(record: &BillRecord, config: &GstbillConfig) -> String {
    let issuer = &config.issuer;
    let fields = &record.fields;
    let tax = &record.tax;
    let half_rate = tax.tax_rate_percent;
    let rule = "-".repeat(WRAP_WIDTH);

    let mut output = String::new();

    output.push_str(&format!("{:^width$}\n", "TAX INVOICE", width = WRAP_WIDTH));
    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!("{}\n", issuer.name));
    for line in &issuer.address_lines {
        output.push_str(&format!("{}\n", line));
    }
    output.push_str(&format!("GSTIN/UIN: {}\n", issuer.gstin));
    output.push_str(&format!(
        "State Name : {}, Code : {}\n",
        issuer.state_name, issuer.state_code
    ));
    output.push_str(&format!("E-Mail : {}\n", issuer.email));
    output.push_str(&format!("{}\n", rule));

    output.push_str(&format!(
        "Invoice No. : {}\n",
        record.invoice_number.as_deref().unwrap_or("")
    ));
    output.push_str(&format!(
        "Dated       : {}\n",
        fields.extracted_at.format("%d/%m/%Y")
    ));
    output.push('\n');

    output.push_str("Consignee (Ship to) / Buyer (Bill to)\n");
    output.push_str(&format!("  {}\n", wrap(&fields.customer_name, WRAP_WIDTH).join(" ")));
    for line in wrap(&fields.customer_address, WRAP_WIDTH) {
        output.push_str(&format!("  {}\n", line));
    }
    output.push_str(&format!(
        "  State Name : {}, Code : {}\n",
        issuer.state_name, issuer.state_code
    ));
    output.push_str(&format!("{}\n", rule));

    output.push_str(&format!(
        "{:<4}{:<40}{:<10}{:>10}{:>14}{:>6}{:>16}\n",
        "Sl", "Description of Goods", "HSN/SAC", "Quantity", "Rate", "per", "Amount"
    ));
    let quantity = format!("1 {}", config.invoice.unit);
    output.push_str(&format!(
        "{:<4}{:<40}{:<10}{:>10}{:>14}{:>6}{:>16}\n",
        "1",
        fields.description(),
        config.invoice.hsn_sac,
        quantity,
        format_inr(tax.net_rate),
        config.invoice.unit,
        format_inr(tax.net_rate)
    ));
    output.push_str(&format!("    Model No.  : {}\n", fields.model));
    output.push_str(&format!("    Serial No. : {}\n", fields.serial_number));
    output.push_str(&format!(
        "{:<4}{:<80}{:>16}\n",
        "",
        format!("CGST @ {}%", half_rate),
        format_inr(tax.cgst)
    ));
    output.push_str(&format!(
        "{:<4}{:<80}{:>16}\n",
        "",
        format!("SGST @ {}%", half_rate),
        format_inr(tax.sgst)
    ));
    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!(
        "{:<4}{:<40}{:>40}{:>16}\n",
        "",
        "Total",
        quantity,
        format!("₹ {}", format_inr(fields.asset_cost))
    ));
    output.push_str(&format!("{}\n", rule));

    if !record.amount_in_words.is_empty() {
        output.push_str("Amount Chargeable (in words)\n");
        output.push_str(&format!("INR {}\n", record.amount_in_words));
        output.push('\n');
    }

    output.push_str(&format!(
        "{:<12}{:>16}{:>10}{:>14}{:>10}{:>14}{:>18}\n",
        "HSN/SAC", "Taxable Value", "CGST %", "CGST Amt", "SGST %", "SGST Amt", "Total Tax Amount"
    ));
    output.push_str(&format!(
        "{:<12}{:>16}{:>10}{:>14}{:>10}{:>14}{:>18}\n",
        config.invoice.hsn_sac,
        format_inr(tax.taxable_value),
        format!("{}%", half_rate),
        format_inr(tax.cgst),
        format!("{}%", half_rate),
        format_inr(tax.sgst),
        format_inr(tax.total_tax)
    ));

    if !record.tax_amount_in_words.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "Tax Amount (in words): INR {}\n",
            record.tax_amount_in_words
        ));
    }
    output.push_str(&format!("{}\n", rule));

    output.push_str("Declaration\n");
    for line in wrap(DECLARATION, WRAP_WIDTH) {
        output.push_str(&format!("{}\n", line));
    }
    output.push('\n');
    output.push_str(&format!("{:>width$}\n", format!("for {}", issuer.name), width = WRAP_WIDTH));
    output.push('\n');
    output.push_str(&format!("{:>width$}\n", "Authorised Signatory", width = WRAP_WIDTH));
    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!(
        "{:^width$}\n",
        format!("SUBJECT TO {} JURISDICTION", issuer.jurisdiction),
        width = WRAP_WIDTH
    ));
    output.push_str(&format!(
        "{:^width$}\n",
        "This is a Computer Generated Invoice",
        width = WRAP_WIDTH
    ));

    output
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(split);
        }

        if current.is_empty() {
            current = word;
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gstbill_core::BillPipeline;

    fn record() -> BillRecord {
        let pages = ["Customer Name : AVADHESH KUMAR GUPTA\n\
Customer Address : 11A KHADEPUR KANPUR 208021\n\
Manufacturer : WHIRLPOOL\n\
Asset Category : AIR CONDITIONER\n\
Model : 3DCOOL PRO\n\
Serial Number : 42466FT251105119\n\
A. Asset Cost : 21,000.00"];

        BillPipeline::new()
            .with_invoice_number("KE/17")
            .with_extraction_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .run(&pages)
    }

    #[test]
    fn test_text_invoice_sections() {
        let text = format_text(&record(), &GstbillConfig::default());

        assert!(text.contains("TAX INVOICE"));
        assert!(text.contains("KATIYAR ELECTRONICS"));
        assert!(text.contains("GSTIN/UIN: 09AMTFK9751D1ZH"));
        assert!(text.contains("Invoice No. : KE/17"));
        assert!(text.contains("Dated       : 01/03/2024"));
        assert!(text.contains("WHIRLPOOL AIR CONDITIONER"));
        assert!(text.contains("CGST @ 14%"));
        assert!(text.contains("₹ 21,000.00"));
        assert!(text.contains("INR Twenty One Thousand Rupees Only"));
        assert!(text.contains("4,593.75"));
        assert!(text.contains("SUBJECT TO KANPUR JURISDICTION"));
        assert!(text.contains("This is a Computer Generated Invoice"));
    }

    #[test]
    fn test_text_invoice_prints_half_rates() {
        let config = GstbillConfig::default();

        let ac = format_text(&record(), &config);
        assert!(ac.contains("CGST @ 14%"));
        assert!(ac.contains("SGST @ 14%"));
        assert!(!ac.contains("7%"));

        let fridge = BillPipeline::new().run(&["Asset Category : REFRIGERATOR\nA. Asset Cost : 11800"]);
        let text = format_text(&fridge, &config);
        assert!(text.contains("CGST @ 9%"));
        assert!(text.contains("SGST @ 9%"));
        assert!(text.contains("    9%"));
        assert!(!text.contains("4%"));
    }

    #[test]
    fn test_text_invoice_joins_wrapped_name() {
        let record = BillPipeline::new().run(&["Customer Name : AVADHESH KUMAR\nGUPTA\n"]);
        let text = format_text(&record, &GstbillConfig::default());
        assert!(text.contains("  AVADHESH KUMAR GUPTA\n"));
    }

    #[test]
    fn test_text_invoice_omits_empty_words() {
        let mut record = record();
        record.amount_in_words.clear();
        record.tax_amount_in_words.clear();

        let text = format_text(&record, &GstbillConfig::default());
        assert!(!text.contains("Amount Chargeable"));
        assert!(!text.contains("Tax Amount (in words)"));
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let csv = format_record(&record(), OutputFormat::Csv, &GstbillConfig::default()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("invoice_number,template,customer_name"));
        assert!(lines[1].starts_with("KE/17,generic,AVADHESH KUMAR GUPTA"));
    }

    #[test]
    fn test_json_roundtrips_amounts() {
        let json = format_record(&record(), OutputFormat::Json, &GstbillConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["invoice_number"], "KE/17");
        assert_eq!(value["fields"]["customer_name"], "AVADHESH KUMAR GUPTA");
        assert_eq!(value["tax"]["tax_rate_percent"], 14);
    }

    #[test]
    fn test_wrap_long_address() {
        let address = "word ".repeat(40);
        let lines = wrap(&address, WRAP_WIDTH);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.chars().count() <= WRAP_WIDTH));
    }

    #[test]
    fn test_wrap_splits_unbroken_text() {
        let lines = wrap(&"x".repeat(150), WRAP_WIDTH);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 100);
        assert_eq!(lines[1].len(), 50);
    }
}
