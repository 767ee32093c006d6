//! Template-driven document parser.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::record::{Field, FieldRecord};

use super::rules::{parse_amount, RuleSet};
use super::{DocumentText, FieldRecordExtractor, TemplateTag};

/// Result of field extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Template whose rules were applied.
    pub template: TemplateTag,
    /// Extracted fields.
    pub record: FieldRecord,
    /// Extraction warnings, one per missed field.
    pub warnings: Vec<String>,
    /// Applicable fields that were not found.
    pub missing_fields: Vec<Field>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based parser for loan-disbursement text.
///
/// Holds no state between documents; one parser can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    /// Fixed extraction date. `None` means today.
    extraction_date: Option<NaiveDate>,
}

impl DocumentParser {
    /// Create a parser that stamps records with today's date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp records with a fixed date.
    pub fn with_extraction_date(mut self, date: NaiveDate) -> Self {
        self.extraction_date = Some(date);
        self
    }

    fn extraction_date(&self) -> NaiveDate {
        self.extraction_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse `text` with the rules for `tag`.
    pub fn parse(&self, text: &DocumentText, tag: TemplateTag) -> ExtractionResult {
        let start = Instant::now();
        let rules = RuleSet::for_template(tag);
        let mut warnings = Vec::new();
        let mut missing_fields = Vec::new();

        debug!(
            "Extracting fields from {} characters of text ({} template)",
            text.len(),
            tag
        );

        let mut record = FieldRecord::empty(self.extraction_date());

        for field in rules.applicable_fields() {
            let Some(value) = rules.rule(field).and_then(|rule| rule.apply(text.as_str())) else {
                debug!("No match for {}", field);
                warnings.push(format!("Could not extract {}", field));
                missing_fields.push(field);
                continue;
            };

            debug!("Matched {}: {:?}", field, value);

            match field {
                Field::CustomerName => record.customer_name = value,
                Field::CustomerAddress => record.customer_address = value,
                Field::Manufacturer => record.manufacturer = value,
                Field::AssetCategory => record.asset_category = value,
                Field::Model => record.model = value,
                Field::SerialNumber => record.serial_number = value,
                Field::AssetCost => {
                    record.asset_cost = match parse_amount(&value) {
                        Some(amount) => amount,
                        None => {
                            warnings.push(format!("Could not parse asset cost from {:?}", value));
                            missing_fields.push(field);
                            Decimal::ZERO
                        }
                    };
                }
            }
        }

        ExtractionResult {
            template: tag,
            record,
            warnings,
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl FieldRecordExtractor for DocumentParser {
    fn extract(&self, text: &DocumentText, tag: TemplateTag) -> FieldRecord {
        self.parse(text, tag).record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    const GENERIC_TEXT: &str = "DISBURSEMENT MEMO\n\
        Customer Name : AVADHESH KUMAR GUPTA\n\
        Customer Address : 11A KHADEPUR NEW BASTI YOGENDRA BIHAR-2\n\
        POST-NAUBASTA KANPUR UTTAR PRADESH 208021 INDIA\n\
        Manufacturer : WHIRLPOOL\n\
        Asset Category : AIR CONDITIONER D\n\
        Sub-Category : SPLIT\n\
        Model : 3DCOOL PRO 1ST 3S INV EXP SSM2PB1-42466\n\
        Serial Number : 42466FT251105119\n\
        A. Asset Cost : 21,000.00\n";

    const IDFC_TEXT: &str = "IDFC FIRST Bank Limited\n\
        Dear Customer, we are pleased to inform you that your loan application of RAM KUMAR has been approved for the product below.\n\
        Customer Address : H NO 12 GOVIND NAGAR KANPUR 208006\n\
        Asset Category : REFRIGERATOR\n\
        Model Number : RT28K3022SE E\n\
        Scheme Name : 10/2\n\
        Serial Number : R28KSE99812\n\
        Cost Of Product : Rs. 34,990.00\n";

    fn parser() -> DocumentParser {
        DocumentParser::new().with_extraction_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_parse_generic_document() {
        let text = DocumentText::from(GENERIC_TEXT);
        let result = parser().parse(&text, TemplateTag::Generic);
        let record = result.record;

        assert_eq!(record.customer_name, "AVADHESH KUMAR GUPTA");
        assert_eq!(
            record.customer_address,
            "11A KHADEPUR NEW BASTI YOGENDRA BIHAR-2\nPOST-NAUBASTA KANPUR UTTAR PRADESH 208021"
        );
        assert_eq!(record.manufacturer, "WHIRLPOOL");
        assert_eq!(record.asset_category, "AIR CONDITIONER");
        assert_eq!(record.model, "3DCOOL PRO 1ST 3S INV EXP SSM2PB1-42466");
        assert_eq!(record.serial_number, "42466FT251105119");
        assert_eq!(record.asset_cost, Decimal::from_str("21000.00").unwrap());
        assert!(result.warnings.is_empty());
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_parse_idfc_document() {
        let text = DocumentText::from(IDFC_TEXT);
        let result = parser().parse(&text, TemplateTag::IdfcFirstBank);
        let record = result.record;

        assert_eq!(record.customer_name, "RAM KUMAR [IDFC FIRST BANK]");
        assert_eq!(record.customer_address, "H NO 12 GOVIND NAGAR KANPUR 208006");
        assert_eq!(record.manufacturer, "");
        assert_eq!(record.asset_category, "REFRIGERATOR");
        assert_eq!(record.model, "RT28K3022SE");
        assert_eq!(record.serial_number, "R28KSE99812");
        assert_eq!(record.asset_cost, Decimal::from_str("34990.00").unwrap());
        // Manufacturer is not applicable, so it is not reported missing
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_wrapped_name_and_category_before_cost() {
        let text = DocumentText::from(
            "Customer Name : AVADHESH KUMAR\nGUPTA\n\
             Asset Category : AIR CONDITIONER\n\
             A. Asset Cost : 21,000.00",
        );
        let record = parser().extract(&text, TemplateTag::Generic);

        assert_eq!(record.customer_name, "AVADHESH KUMAR\nGUPTA");
        assert_eq!(record.asset_category, "AIR CONDITIONER");
        assert_eq!(record.asset_cost, Decimal::from_str("21000.00").unwrap());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let parser = parser();
        for (raw, tag) in [
            (GENERIC_TEXT, TemplateTag::Generic),
            (IDFC_TEXT, TemplateTag::IdfcFirstBank),
        ] {
            let text = DocumentText::from(raw);
            assert_eq!(parser.extract(&text, tag), parser.extract(&text, tag));
        }
    }

    #[test]
    fn test_missing_cost_defaults_to_zero() {
        let text = DocumentText::from("Asset Category : AIR CONDITIONER D\nSerial Number : X1");
        let result = parser().parse(&text, TemplateTag::Generic);

        assert_eq!(result.record.asset_cost, Decimal::ZERO);
        assert_eq!(result.record.asset_category, "AIR CONDITIONER");
        assert!(result.missing_fields.contains(&Field::AssetCost));
        assert!(result.warnings.iter().any(|w| w == "Could not extract asset cost"));
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let text = DocumentText::from("");
        let record = parser().extract(&text, TemplateTag::Generic);
        assert_eq!(
            record,
            FieldRecord::empty(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_extract_auto_classifies() {
        let text = DocumentText::from(IDFC_TEXT);
        let record = parser().extract_auto(&text);
        assert_eq!(record.customer_name, "RAM KUMAR [IDFC FIRST BANK]");
    }

    #[test]
    fn test_generic_rules_on_idfc_text_miss_the_name() {
        let text = DocumentText::from(IDFC_TEXT);
        let record = parser().extract(&text, TemplateTag::Generic);
        assert_eq!(record.customer_name, "");
        assert_eq!(record.asset_cost, Decimal::ZERO);
    }
}
