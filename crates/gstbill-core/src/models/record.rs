//! Records produced by the extraction pipeline.
//!
//! [`BillRecord`] is the contract with the invoice renderer: every value the
//! printed tax invoice needs is present here, already rounded and worded.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::extraction::TemplateTag;

/// Fields recovered from a loan-disbursement document.
///
/// String fields are empty on a miss, never absent. `asset_cost` is zero on a
/// miss; callers treat zero as "extraction failed", not as a free item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Customer name, possibly suffixed with an issuer marker.
    pub customer_name: String,

    /// Customer address up to and including the postal code.
    pub customer_address: String,

    /// Manufacturer (brand). Empty for templates without the field.
    pub manufacturer: String,

    /// Asset category, e.g. "AIR CONDITIONER".
    pub asset_category: String,

    /// Model name or number.
    pub model: String,

    /// Serial/IMEI number.
    pub serial_number: String,

    /// Gross asset cost, inclusive of GST.
    pub asset_cost: Decimal,

    /// Date the record was extracted.
    pub extracted_at: NaiveDate,
}

impl FieldRecord {
    /// Create an empty record dated `extracted_at`.
    pub fn empty(extracted_at: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            customer_address: String::new(),
            manufacturer: String::new(),
            asset_category: String::new(),
            model: String::new(),
            serial_number: String::new(),
            asset_cost: Decimal::ZERO,
            extracted_at,
        }
    }

    /// Goods description as printed on the invoice ("WHIRLPOOL AIR CONDITIONER").
    pub fn description(&self) -> String {
        [self.manufacturer.as_str(), self.asset_category.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An extractable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CustomerName,
    CustomerAddress,
    Manufacturer,
    AssetCategory,
    Model,
    SerialNumber,
    AssetCost,
}

impl Field {
    /// Every field, in extraction order.
    pub const ALL: [Field; 7] = [
        Field::CustomerName,
        Field::CustomerAddress,
        Field::Manufacturer,
        Field::AssetCategory,
        Field::Model,
        Field::SerialNumber,
        Field::AssetCost,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::CustomerName => "customer name",
            Field::CustomerAddress => "customer address",
            Field::Manufacturer => "manufacturer",
            Field::AssetCategory => "asset category",
            Field::Model => "model",
            Field::SerialNumber => "serial number",
            Field::AssetCost => "asset cost",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GST breakdown of an inclusive gross amount.
///
/// All amounts are rounded to two decimals (half away from zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross amount divided by the inclusive divisor (the per-unit rate).
    pub net_rate: Decimal,

    /// Central GST.
    pub cgst: Decimal,

    /// State GST. Always equal to `cgst`.
    pub sgst: Decimal,

    /// Price base net of tax.
    pub taxable_value: Decimal,

    /// Rate applied to each half: 9 or 14.
    pub tax_rate_percent: u8,

    /// CGST plus SGST.
    pub total_tax: Decimal,
}

/// Metadata about the extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Version of the rule tables that produced the fields.
    pub rules_version: u32,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Number of pages the text came from.
    pub page_count: usize,

    /// Warnings encountered during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Fields that could not be extracted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<Field>,
}

/// The combined result handed to the invoice renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    /// Invoice number supplied by the operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Template the source document was classified as.
    pub template: TemplateTag,

    /// Extracted fields.
    pub fields: FieldRecord,

    /// Tax breakdown of `fields.asset_cost`.
    pub tax: TaxBreakdown,

    /// Asset cost in words. Empty means "do not print".
    pub amount_in_words: String,

    /// Total tax in words. Empty means "do not print".
    pub tax_amount_in_words: String,

    /// Extraction metadata.
    pub metadata: ExtractionMetadata,
}

impl BillRecord {
    /// Check the record for problems a renderer should surface.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.invoice_number.as_deref().is_none_or(str::is_empty) {
            issues.push("Missing invoice number".to_string());
        }

        if self.fields.customer_name.is_empty() {
            issues.push("Missing customer name".to_string());
        }

        if self.fields.customer_address.is_empty() {
            issues.push("Missing customer address".to_string());
        }

        if self.fields.asset_cost.is_zero() {
            issues.push("Asset cost is zero (extraction failed)".to_string());
        }

        if self.tax.cgst != self.tax.sgst {
            issues.push(format!(
                "CGST ({}) differs from SGST ({})",
                self.tax.cgst, self.tax.sgst
            ));
        }

        issues
    }
}
