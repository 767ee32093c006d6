//! Page text normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Linearized text of a whole document: every page, in reading order.
///
/// Immutable once built. Embedded line breaks from the source are kept, so
/// rules must tolerate fields that wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentText(String);

impl DocumentText {
    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document carried no text at all.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for DocumentText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join page texts with a single space, preserving order.
pub fn normalize<S: AsRef<str>>(pages: &[S]) -> DocumentText {
    let mut text = String::with_capacity(pages.iter().map(|p| p.as_ref().len() + 1).sum());

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(page.as_ref());
    }

    DocumentText(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_joined_with_single_space() {
        let text = normalize(&["Customer Name : RAM", "Asset Cost 100"]);
        assert_eq!(text.as_str(), "Customer Name : RAM Asset Cost 100");
    }

    #[test]
    fn test_line_breaks_preserved() {
        let text = normalize(&["Address : 11A\nKANPUR", "208021"]);
        assert_eq!(text.as_str(), "Address : 11A\nKANPUR 208021");
    }

    #[test]
    fn test_no_pages() {
        let pages: [&str; 0] = [];
        let text = normalize(&pages);
        assert!(text.is_empty());
        assert_eq!(text.len(), 0);
    }
}
