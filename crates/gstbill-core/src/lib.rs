//! Core library for GST tax invoice generation.
//!
//! This crate provides:
//! - Page text decoding from PDF and plain-text documents
//! - Template-aware field extraction from loan-disbursement text
//! - GST breakdown (CGST/SGST) from an inclusive gross amount
//! - Indian-grouping amount in words (crore/lakh/thousand)
//! - A combined bill record for an external invoice renderer

pub mod error;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod tax;
pub mod words;

pub use error::{DecodeError, GstbillError, Result};
pub use extraction::rules::{format_inr, RULES_VERSION};
pub use extraction::{classify, normalize, DocumentParser, DocumentText, ExtractionResult, TemplateTag};
pub use models::config::GstbillConfig;
pub use models::record::{BillRecord, ExtractionMetadata, Field, FieldRecord, TaxBreakdown};
pub use pipeline::BillPipeline;
pub use source::{open_source, PageSource, PlainTextSource};
#[cfg(feature = "pdf")]
pub use source::PdfExtractor;
pub use tax::{compute_tax, TaxClass};
pub use words::{amount_in_words, amount_in_words_f64, amount_in_words_str};
