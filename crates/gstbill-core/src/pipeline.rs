//! Pages in, bill record out.
//!
//! normalize -> classify -> extract -> tax -> words. Every stage is pure;
//! the only fallible step is decoding a [`PageSource`].

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::Result;
use crate::extraction::rules::RULES_VERSION;
use crate::extraction::{classify, normalize, DocumentParser, TemplateTag};
use crate::models::config::GstbillConfig;
use crate::models::record::{BillRecord, ExtractionMetadata};
use crate::source::PageSource;
use crate::tax::compute_tax;
use crate::words::amount_in_words;

/// End-to-end extraction pipeline for one document at a time.
#[derive(Debug, Clone, Default)]
pub struct BillPipeline {
    parser: DocumentParser,
    template: Option<TemplateTag>,
    invoice_number: Option<String>,
}

impl BillPipeline {
    /// Create a pipeline that classifies every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from configuration.
    pub fn from_config(config: &GstbillConfig) -> Self {
        Self {
            template: config.extraction.template,
            ..Self::default()
        }
    }

    /// Skip classification and always use `template`.
    pub fn with_template(mut self, template: TemplateTag) -> Self {
        self.template = Some(template);
        self
    }

    /// Invoice number to carry on the record.
    pub fn with_invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = Some(invoice_number.into());
        self
    }

    /// Stamp records with a fixed date instead of today.
    pub fn with_extraction_date(mut self, date: NaiveDate) -> Self {
        self.parser = self.parser.with_extraction_date(date);
        self
    }

    /// Run the pipeline over decoded page text.
    pub fn run<S: AsRef<str>>(&self, pages: &[S]) -> BillRecord {
        let start = Instant::now();

        let text = normalize(pages);
        let template = self.template.unwrap_or_else(|| classify(&text));
        let extraction = self.parser.parse(&text, template);

        let tax = compute_tax(extraction.record.asset_cost, &extraction.record.asset_category);
        let cost_words = amount_in_words(extraction.record.asset_cost);
        let tax_words = amount_in_words(tax.total_tax);

        debug!(
            "Tax at {}%: cgst={} sgst={} total={}",
            tax.tax_rate_percent, tax.cgst, tax.sgst, tax.total_tax
        );

        let record = BillRecord {
            invoice_number: self.invoice_number.clone(),
            template,
            fields: extraction.record,
            tax,
            amount_in_words: cost_words,
            tax_amount_in_words: tax_words,
            metadata: ExtractionMetadata {
                rules_version: RULES_VERSION,
                processing_time_ms: Some(start.elapsed().as_millis() as u64),
                page_count: pages.len(),
                warnings: extraction.warnings,
                missing_fields: extraction.missing_fields,
            },
        };

        info!(
            "Extracted bill for {:?} ({} missing fields)",
            record.fields.customer_name,
            record.metadata.missing_fields.len()
        );

        record
    }

    /// Decode `source`, then run the pipeline. Fails only if decoding fails.
    pub fn run_source(&self, source: &dyn PageSource) -> Result<BillRecord> {
        let pages = source.pages()?;
        Ok(self.run(&pages))
    }
}
