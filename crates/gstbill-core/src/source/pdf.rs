//! PDF page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace, warn};

use crate::error::DecodeError;

use super::PageSource;

type Result<T> = std::result::Result<T, DecodeError>;

/// PDF text extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    /// Maximum pages to decode (0 = unlimited).
    max_pages: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            max_pages: 0,
        }
    }

    /// Limit the number of pages decoded.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| DecodeError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DecodeError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| DecodeError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DecodeError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for PdfExtractor {
    fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len())
            .unwrap_or(0)
    }

    fn pages(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(DecodeError::Parse("No document loaded".to_string()));
        }

        let mut pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| DecodeError::TextExtraction(e.to_string()))?;

        if self.max_pages > 0 && pages.len() > self.max_pages {
            warn!(
                "Decoding only the first {} of {} pages",
                self.max_pages,
                pages.len()
            );
            pages.truncate(self.max_pages);
        }

        for (i, page) in pages.iter().enumerate() {
            trace!("Page {}: {} chars", i + 1, page.len());
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_pages_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.pages(), Err(DecodeError::Parse(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)));
    }
}
