//! Error types for the gstbill-core library.

use thiserror::Error;

/// Main error type for the gstbill library.
#[derive(Error, Debug)]
pub enum GstbillError {
    /// The source document could not be decoded into page text.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a source document into page text.
///
/// These are the only fatal errors for a document. Field misses and numeric
/// parse failures never surface here.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Failed to open/parse the PDF container.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from a loaded document.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and the empty password did not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The document has no pages.
    #[error("document has no pages")]
    NoPages,

    /// Text input is not valid UTF-8.
    #[error("text is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// File extension is not one we can decode.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for the gstbill library.
pub type Result<T> = std::result::Result<T, GstbillError>;
