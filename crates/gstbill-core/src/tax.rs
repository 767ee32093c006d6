//! GST breakdown of an inclusive gross amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::extraction::rules::round_money;
use crate::models::record::TaxBreakdown;

/// GST rate class of the goods on the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxClass {
    /// 18% GST, split 9% CGST / 9% SGST.
    Standard18,
    /// 28% GST for air conditioners, split 14% / 14%.
    AirConditioner28,
}

impl TaxClass {
    /// Classify goods by their asset category.
    pub fn for_category(category: &str) -> Self {
        if category.to_uppercase().contains("AIR CONDITIONER") {
            TaxClass::AirConditioner28
        } else {
            TaxClass::Standard18
        }
    }

    /// Divisor that strips the tax from an inclusive amount (1.18 or 1.28).
    pub fn divisor(&self) -> Decimal {
        match self {
            TaxClass::Standard18 => Decimal::new(118, 2),
            TaxClass::AirConditioner28 => Decimal::new(128, 2),
        }
    }

    /// Rate of each half (CGST or SGST) in percent.
    pub fn half_rate_percent(&self) -> u8 {
        match self {
            TaxClass::Standard18 => 9,
            TaxClass::AirConditioner28 => 14,
        }
    }

    /// Combined GST rate in percent.
    pub fn total_rate_percent(&self) -> u8 {
        self.half_rate_percent() * 2
    }
}

/// Compute the GST breakdown of `asset_cost` for goods in `asset_category`.
///
/// Intermediates are kept at full precision and every output is rounded
/// independently, so `cgst + sgst` may differ from `total_tax` by a paisa.
pub fn compute_tax(asset_cost: Decimal, asset_category: &str) -> TaxBreakdown {
    let class = TaxClass::for_category(asset_category);
    let gross = asset_cost.max(Decimal::ZERO);

    let net_rate = gross / class.divisor();
    let tax = gross - net_rate;
    let cgst = tax / Decimal::new(2, 0);
    let sgst = cgst;
    let taxable_value = gross - (cgst + sgst);
    let total_tax = cgst + sgst;

    TaxBreakdown {
        net_rate: round_money(net_rate),
        cgst: round_money(cgst),
        sgst: round_money(sgst),
        taxable_value: round_money(taxable_value),
        tax_rate_percent: class.half_rate_percent(),
        total_tax: round_money(total_tax),
    }
}
