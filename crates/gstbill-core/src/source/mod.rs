//! Page text sources: turn a document on disk into ordered page strings.

#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;
pub use text::PlainTextSource;

use std::path::Path;

use crate::error::{DecodeError, Result};
use crate::models::config::PdfConfig;

/// Trait for document decoders.
pub trait PageSource {
    /// Number of pages the source holds.
    fn page_count(&self) -> usize;

    /// Text of every page, in reading order.
    fn pages(&self) -> std::result::Result<Vec<String>, DecodeError>;
}

/// Open a document, picking the decoder from the file extension.
#[cfg_attr(not(feature = "pdf"), allow(unused_variables))]
pub fn open_source(path: &Path, config: &PdfConfig) -> Result<Box<dyn PageSource>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        #[cfg(feature = "pdf")]
        "pdf" => {
            let data = std::fs::read(path)?;
            let mut extractor = PdfExtractor::new().with_max_pages(config.max_pages);
            extractor.load(&data)?;
            Ok(Box::new(extractor))
        }
        "txt" | "text" => {
            let data = std::fs::read(path)?;
            Ok(Box::new(PlainTextSource::from_bytes(data)?))
        }
        other => Err(DecodeError::UnsupportedFormat(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GstbillError;

    #[test]
    fn test_open_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.txt");
        std::fs::write(&path, "page one\x0cpage two").unwrap();

        let source = open_source(&path, &PdfConfig::default()).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.pages().unwrap(), vec!["page one", "page two"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, [0u8; 4]).unwrap();

        let err = open_source(&path, &PdfConfig::default()).err().unwrap();
        assert!(matches!(
            err,
            GstbillError::Decode(DecodeError::UnsupportedFormat(ref ext)) if ext == "png"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = open_source(Path::new("/nonexistent/letter.txt"), &PdfConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, GstbillError::Io(_)));
    }
}
