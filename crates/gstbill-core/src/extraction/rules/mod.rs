//! Rule tables for field extraction, one per source template.
//!
//! A template that has no rule for a field leaves that field empty. Adding a
//! template means adding a [`TemplateTag`] variant and a [`RuleSet`] here.

pub mod amounts;
pub mod patterns;

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::TemplateTag;
use crate::models::record::Field;

pub use amounts::{format_inr, parse_amount, round_money};
use patterns::*;

/// Bumped whenever a pattern or post-processing step changes behavior.
pub const RULES_VERSION: u32 = 1;

/// Marker appended to names taken from IDFC FIRST Bank letters.
pub const IDFC_MARKER: &str = "[IDFC FIRST BANK]";

/// Clean-up applied to a trimmed capture.
#[derive(Debug, Clone, Copy)]
pub enum PostProcess {
    /// Keep the capture as is.
    None,
    /// Append a bracketed provenance marker after a space.
    AppendMarker(&'static str),
    /// Drop one whitespace-separated trailing token left over from layout concatenation.
    StripTrailingToken(&'static str),
    /// Remove a leading label the capture may still carry.
    StripLeadingLabel(&'static Regex),
}

impl PostProcess {
    fn apply(&self, value: &str) -> String {
        match self {
            PostProcess::None => value.to_string(),
            PostProcess::AppendMarker(marker) => format!("{} {}", value, marker),
            PostProcess::StripTrailingToken(token) => match value.strip_suffix(token) {
                Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end().to_string(),
                _ => value.to_string(),
            },
            PostProcess::StripLeadingLabel(label) => label.replace(value, "").trim().to_string(),
        }
    }
}

/// A single field rule: pattern plus clean-up.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static Regex,
    pub post: PostProcess,
}

impl Rule {
    const fn new(pattern: &'static Regex) -> Self {
        Self {
            pattern,
            post: PostProcess::None,
        }
    }

    const fn with_post(pattern: &'static Regex, post: PostProcess) -> Self {
        Self { pattern, post }
    }

    /// Apply the rule. `None` when the pattern misses or captures only whitespace.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let raw = caps.get(1)?.as_str().trim();
        if raw.is_empty() {
            return None;
        }

        let value = self.post.apply(raw);
        if value.is_empty() { None } else { Some(value) }
    }
}

/// Per-field rules for one template.
#[derive(Debug)]
pub struct RuleSet {
    pub template: TemplateTag,
    pub customer_name: Option<Rule>,
    pub customer_address: Option<Rule>,
    pub manufacturer: Option<Rule>,
    pub asset_category: Option<Rule>,
    pub model: Option<Rule>,
    pub serial_number: Option<Rule>,
    pub asset_cost: Option<Rule>,
}

lazy_static! {
    static ref GENERIC_RULES: RuleSet = RuleSet {
        template: TemplateTag::Generic,
        customer_name: Some(Rule::new(&CUSTOMER_NAME)),
        customer_address: Some(address_rule()),
        manufacturer: Some(Rule::new(&MANUFACTURER)),
        asset_category: Some(category_rule()),
        model: Some(Rule::new(&MODEL)),
        serial_number: Some(Rule::new(&SERIAL_NUMBER)),
        asset_cost: Some(Rule::new(&ASSET_COST)),
    };

    static ref IDFC_RULES: RuleSet = RuleSet {
        template: TemplateTag::IdfcFirstBank,
        customer_name: Some(Rule::with_post(&LOAN_APPLICANT, PostProcess::AppendMarker(IDFC_MARKER))),
        customer_address: Some(address_rule()),
        manufacturer: None,
        asset_category: Some(category_rule()),
        model: Some(Rule::with_post(&MODEL_NUMBER, PostProcess::StripTrailingToken("E"))),
        serial_number: Some(Rule::new(&SERIAL_NUMBER)),
        asset_cost: Some(Rule::new(&PRODUCT_COST)),
    };
}

fn address_rule() -> Rule {
    Rule::with_post(&ADDRESS, PostProcess::StripLeadingLabel(&ADDRESS_LABEL))
}

fn category_rule() -> Rule {
    Rule::with_post(&ASSET_CATEGORY, PostProcess::StripTrailingToken("D"))
}

impl RuleSet {
    /// Rule table for a template.
    pub fn for_template(tag: TemplateTag) -> &'static RuleSet {
        match tag {
            TemplateTag::Generic => &GENERIC_RULES,
            TemplateTag::IdfcFirstBank => &IDFC_RULES,
        }
    }

    /// Rule for a field, or `None` when the template has no such field.
    pub fn rule(&self, field: Field) -> Option<&Rule> {
        match field {
            Field::CustomerName => self.customer_name.as_ref(),
            Field::CustomerAddress => self.customer_address.as_ref(),
            Field::Manufacturer => self.manufacturer.as_ref(),
            Field::AssetCategory => self.asset_category.as_ref(),
            Field::Model => self.model.as_ref(),
            Field::SerialNumber => self.serial_number.as_ref(),
            Field::AssetCost => self.asset_cost.as_ref(),
        }
    }

    /// Fields this template can produce.
    pub fn applicable_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| self.rule(*f).is_some())
            .collect()
    }
}
