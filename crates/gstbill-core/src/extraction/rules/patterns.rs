//! Regex patterns for loan-disbursement document fields.
//!
//! Labels are matched case-sensitively as printed by the issuers. Every
//! pattern puts the field value in capture group 1.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Customer name: 1-3 whitespace-separated alphabetic words after the label
    pub static ref CUSTOMER_NAME: Regex = Regex::new(
        r"Customer Name[ \t]*:?\s*([A-Za-z]+(?:\s+[A-Za-z]+){0,2})"
    ).unwrap();

    // Customer name from an approval sentence (IDFC FIRST Bank)
    pub static ref LOAN_APPLICANT: Regex = Regex::new(
        r"(?is)loan application of\s+(.+?)\s+has been approved for"
    ).unwrap();

    // Address up to and including the first 6-digit PIN code
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?s)Address[ \t]*:?\s*(.*?\b\d{6}\b)"
    ).unwrap();

    // Residual label left at the start of a captured address
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"^(?:(?:Customer\s+)?Address[ \t]*:?\s*)+"
    ).unwrap();

    pub static ref MANUFACTURER: Regex = Regex::new(
        r"Manufacturer[ \t]*:?\s*(\S+)"
    ).unwrap();

    // Asset category up to the next known label
    pub static ref ASSET_CATEGORY: Regex = Regex::new(
        r"(?s)Asset Category[ \t]*:?\s*(.*?)\s*(?:Sub-Category|Variant|Model|Serial Number|A\.\s*Asset Cost|Asset Cost|$)"
    ).unwrap();

    pub static ref MODEL: Regex = Regex::new(
        r"Model[ \t]*:?[ \t]*([^\r\n]*?)[ \t]*(?:Asset Category|\r|\n|$)"
    ).unwrap();

    pub static ref MODEL_NUMBER: Regex = Regex::new(
        r"Model Number[ \t]*:?[ \t]*([^\r\n]*?)[ \t]*(?:Scheme Name|Serial Number|Asset Category|\r|\n|$)"
    ).unwrap();

    pub static ref SERIAL_NUMBER: Regex = Regex::new(
        r"Serial Number[ \t]*:?\s*(\S+)"
    ).unwrap();

    // Amounts: 21000, 21,000.00, 1,21,000.5 with an optional currency prefix
    pub static ref ASSET_COST: Regex = Regex::new(
        r"A\.\s*Asset Cost[ \t]*:?\s*(?:Rs\.?|INR|₹)?\s*(\d+(?:,\d+)*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref PRODUCT_COST: Regex = Regex::new(
        r"(?i)Cost Of Product[ \t]*:?\s*(?:Rs\.?|INR|₹)?\s*(\d+(?:,\d+)*(?:\.\d{1,2})?)"
    ).unwrap();
}
