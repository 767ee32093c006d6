//! Already-decoded text documents.

use crate::error::DecodeError;

use super::PageSource;

/// Page separator in plain-text exports.
const FORM_FEED: char = '\x0c';

/// A text document whose pages are separated by form feeds.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    text: String,
}

impl PlainTextSource {
    /// Wrap text that is already a `String`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode UTF-8 bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, DecodeError> {
        Ok(Self::new(String::from_utf8(data)?))
    }
}

impl PageSource for PlainTextSource {
    fn page_count(&self) -> usize {
        self.text.split(FORM_FEED).count()
    }

    fn pages(&self) -> Result<Vec<String>, DecodeError> {
        Ok(self.text.split(FORM_FEED).map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let source = PlainTextSource::new("Customer Name : RAM");
        assert_eq!(source.page_count(), 1);
        assert_eq!(source.pages().unwrap(), vec!["Customer Name : RAM"]);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = PlainTextSource::from_bytes(vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding(_)));
    }
}
