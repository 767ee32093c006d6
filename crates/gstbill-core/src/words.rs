//! Currency amounts in words, Indian grouping (crore, lakh, thousand).
//!
//! An empty string means the amount is not printable (negative, NaN, not a
//! number, or too large). It never means zero.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Words for 0..=999. Zero yields nothing.
fn push_hundreds(mut n: u64, words: &mut Vec<&'static str>) {
    if n >= 100 {
        words.push(ONES[(n / 100) as usize]);
        words.push("Hundred");
        n %= 100;
    }
    if n >= 20 {
        words.push(TENS[(n / 10) as usize]);
        n %= 10;
    } else if n >= 10 {
        words.push(TEENS[(n - 10) as usize]);
        return;
    }
    if n > 0 {
        words.push(ONES[n as usize]);
    }
}

/// Words for any integer, with crore segments themselves grouped.
fn push_indian(n: u64, words: &mut Vec<&'static str>) {
    let crores = n / CRORE;
    let lakhs = (n % CRORE) / LAKH;
    let thousands = (n % LAKH) / THOUSAND;
    let rest = n % THOUSAND;

    if crores > 0 {
        push_indian(crores, words);
        words.push("Crore");
    }
    if lakhs > 0 {
        push_hundreds(lakhs, words);
        words.push("Lakh");
    }
    if thousands > 0 {
        push_hundreds(thousands, words);
        words.push("Thousand");
    }
    push_hundreds(rest, words);
}

/// Convert a rupee amount to words, e.g. "Twenty One Thousand Rupees Only".
///
/// Paise are rounded to two decimals. Both parts nonzero are joined with
/// "And"; a whole-rupee amount ends in "Only".
pub fn amount_in_words(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        return String::new();
    }

    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if amount.is_zero() {
        return "Zero Rupees Only".to_string();
    }

    let rupees_part = amount.trunc();
    let (Some(rupees), Some(paise)) = (
        rupees_part.to_u64(),
        ((amount - rupees_part) * Decimal::new(100, 0)).to_u64(),
    ) else {
        return String::new();
    };

    let mut words = Vec::new();

    if rupees > 0 {
        push_indian(rupees, &mut words);
        words.push("Rupees");
    }

    if paise > 0 {
        if rupees > 0 {
            words.push("And");
        }
        push_hundreds(paise, &mut words);
        words.push("Paise");
    } else {
        words.push("Only");
    }

    words.join(" ")
}

/// [`amount_in_words`] for floating-point input. NaN and infinities yield "".
pub fn amount_in_words_f64(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    Decimal::from_f64(amount)
        .map(amount_in_words)
        .unwrap_or_default()
}

/// [`amount_in_words`] for text input. Non-numeric text yields "".
pub fn amount_in_words_str(amount: &str) -> String {
    Decimal::from_str(amount.trim())
        .map(amount_in_words)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> String {
        amount_in_words(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_zero() {
        assert_eq!(words("0"), "Zero Rupees Only");
        assert_eq!(words("0.00"), "Zero Rupees Only");
    }

    #[test]
    fn test_whole_rupees() {
        assert_eq!(words("21000.00"), "Twenty One Thousand Rupees Only");
        assert_eq!(words("1"), "One Rupees Only");
        assert_eq!(words("115"), "One Hundred Fifteen Rupees Only");
        assert_eq!(words("100000"), "One Lakh Rupees Only");
        assert_eq!(
            words("12345678"),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only"
        );
    }

    #[test]
    fn test_rupees_and_paise() {
        assert_eq!(
            words("1601.69"),
            "One Thousand Six Hundred One Rupees And Sixty Nine Paise"
        );
        assert_eq!(
            words("3203.39"),
            "Three Thousand Two Hundred Three Rupees And Thirty Nine Paise"
        );
        assert_eq!(
            words("4593.75"),
            "Four Thousand Five Hundred Ninety Three Rupees And Seventy Five Paise"
        );
    }

    #[test]
    fn test_paise_only() {
        assert_eq!(words("0.50"), "Fifty Paise");
        assert_eq!(words("0.11"), "Eleven Paise");
    }

    #[test]
    fn test_large_crore_segment() {
        assert_eq!(
            words("15000000000"),
            "One Thousand Five Hundred Crore Rupees Only"
        );
    }

    #[test]
    fn test_extra_precision_rounded() {
        assert_eq!(words("10.005"), "Ten Rupees And One Paise");
    }

    #[test]
    fn test_unprintable_input() {
        assert_eq!(words("-5"), "");
        assert_eq!(amount_in_words_f64(-5.0), "");
        assert_eq!(amount_in_words_f64(f64::NAN), "");
        assert_eq!(amount_in_words_f64(f64::INFINITY), "");
        assert_eq!(amount_in_words_str("abc"), "");
        assert_eq!(amount_in_words_str(""), "");
    }

    #[test]
    fn test_f64_and_str_inputs() {
        assert_eq!(amount_in_words_f64(21000.0), "Twenty One Thousand Rupees Only");
        assert_eq!(amount_in_words_str(" 1601.69 "), words("1601.69"));
    }
}
