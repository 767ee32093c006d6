//! Configuration structures for the billing pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{GstbillError, Result};
use crate::extraction::TemplateTag;

/// Main configuration for gstbill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GstbillConfig {
    /// PDF decoding configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Invoice line configuration.
    pub invoice: InvoiceConfig,

    /// Issuer identity printed on the invoice.
    pub issuer: IssuerConfig,
}

/// PDF decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to decode (0 = unlimited).
    pub max_pages: usize,

    /// Normalized text shorter than this is reported as a likely scan.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Force a template instead of classifying the text.
    pub template: Option<TemplateTag>,
}

/// Invoice line configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceConfig {
    /// HSN/SAC code printed in the goods and tax tables.
    pub hsn_sac: String,

    /// Unit of measure.
    pub unit: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            hsn_sac: String::new(),
            unit: "PCS".to_string(),
        }
    }
}

/// Issuer identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerConfig {
    /// Trading name.
    pub name: String,

    /// Postal address, one entry per printed line.
    pub address_lines: Vec<String>,

    /// GSTIN/UIN.
    pub gstin: String,

    /// State name.
    pub state_name: String,

    /// GST state code.
    pub state_code: String,

    /// Contact e-mail.
    pub email: String,

    /// Court jurisdiction printed in the footer.
    pub jurisdiction: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            name: "KATIYAR ELECTRONICS".to_string(),
            address_lines: vec![
                "H.I.G J-33 VISHWABANKBARRA".to_string(),
                "KARRAHI".to_string(),
                "KANPUR NAGAR".to_string(),
            ],
            gstin: "09AMTFK9751D1ZH".to_string(),
            state_name: "Uttar Pradesh".to_string(),
            state_code: "09".to_string(),
            email: "katiyar552@gmail.com".to_string(),
            jurisdiction: "KANPUR".to_string(),
        }
    }
}

impl GstbillConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| GstbillError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| GstbillError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"template": "idfc_first_bank"}}"#).unwrap();

        let config = GstbillConfig::from_file(&path).unwrap();
        assert_eq!(config.extraction.template, Some(TemplateTag::IdfcFirstBank));
        assert_eq!(config.invoice.unit, "PCS");
        assert_eq!(config.pdf.min_text_length, 50);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = GstbillConfig::default();
        config.issuer.name = "ACME APPLIANCES".to_string();
        config.save(&path).unwrap();

        let loaded = GstbillConfig::from_file(&path).unwrap();
        assert_eq!(loaded.issuer.name, "ACME APPLIANCES");
        assert_eq!(loaded.extraction.template, None);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = GstbillConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, GstbillError::Config(_)));
    }
}
