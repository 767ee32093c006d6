//! Field extraction from loan-disbursement document text.

mod normalize;
mod parser;
pub mod rules;
mod template;

pub use normalize::{normalize, DocumentText};
pub use parser::{DocumentParser, ExtractionResult};
pub use template::{classify, TemplateTag};

use crate::models::record::FieldRecord;

/// Trait for document field extractors.
pub trait FieldRecordExtractor {
    /// Extract a field record from normalized text using the rules for `tag`.
    fn extract(&self, text: &DocumentText, tag: TemplateTag) -> FieldRecord;

    /// Classify, then extract.
    fn extract_auto(&self, text: &DocumentText) -> FieldRecord {
        self.extract(text, classify(text))
    }
}
