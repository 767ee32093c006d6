//! Source template classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DocumentText;

/// Known source-document layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateTag {
    /// Any document with labelled fields ("Customer Name", "A. Asset Cost", ...).
    #[default]
    Generic,
    /// IDFC FIRST Bank loan approval letter.
    IdfcFirstBank,
}

impl TemplateTag {
    /// Short name used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateTag::Generic => "generic",
            TemplateTag::IdfcFirstBank => "idfc",
        }
    }
}

impl fmt::Display for TemplateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" => Ok(TemplateTag::Generic),
            "idfc" | "idfc_first_bank" | "idfc-first-bank" => Ok(TemplateTag::IdfcFirstBank),
            other => Err(format!("unknown template: {}", other)),
        }
    }
}

/// Marker checks, tried in order. Upper-case markers, matched case-insensitively.
const MARKERS: &[(&str, TemplateTag)] = &[("IDFC FIRST", TemplateTag::IdfcFirstBank)];

/// Decide which template produced `text`. First marker hit wins; otherwise `Generic`.
pub fn classify(text: &DocumentText) -> TemplateTag {
    let upper = text.as_str().to_uppercase();

    let tag = MARKERS
        .iter()
        .find(|(marker, _)| upper.contains(marker))
        .map(|(_, tag)| *tag)
        .unwrap_or_default();

    debug!("Classified document as {} template", tag);
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_marker_selects_idfc() {
        let text = DocumentText::from("Dear Sir, IDFC FIRST Bank Limited is pleased");
        assert_eq!(classify(&text), TemplateTag::IdfcFirstBank);
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        let text = DocumentText::from("idfc first bank");
        assert_eq!(classify(&text), TemplateTag::IdfcFirstBank);
    }

    #[test]
    fn test_fallback_is_generic() {
        let text = DocumentText::from("Customer Name : RAM KUMAR");
        assert_eq!(classify(&text), TemplateTag::Generic);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("idfc".parse::<TemplateTag>(), Ok(TemplateTag::IdfcFirstBank));
        assert_eq!("Generic".parse::<TemplateTag>(), Ok(TemplateTag::Generic));
        assert!("hdfc".parse::<TemplateTag>().is_err());
    }
}
