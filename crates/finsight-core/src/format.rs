use rust_decimal::{Decimal, RoundingStrategy};

use crate::parsing::parse_period_end_date;

pub const PERIOD_NOT_SPECIFIED: &str = "Period Not Specified";

const MAX_FRACTION_DIGITS: u32 = 3;

/// Format an amount with en-US digit grouping ("1,234,567.5").
///
/// At most three fraction digits are kept, rounding midpoints away from
/// zero. No currency symbol is added.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a period end date for display ("December 31, 2024").
///
/// An empty string gives [`PERIOD_NOT_SPECIFIED`]; anything that is not a
/// date is echoed unchanged.
pub fn format_period_end_date(raw: &str) -> String {
    if raw.is_empty() {
        return PERIOD_NOT_SPECIFIED.to_string();
    }
    match parse_period_end_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(dec!(1000000)), "1,000,000");
        assert_eq!(format_amount(dec!(600000)), "600,000");
        assert_eq!(format_amount(dec!(999)), "999");
        assert_eq!(format_amount(dec!(1000)), "1,000");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_amount(dec!(-1234567)), "-1,234,567");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_amount(Decimal::ZERO), "0");
        assert_eq!(format_amount(dec!(-0.0001)), "0");
    }

    #[test]
    fn test_fraction_rounding() {
        assert_eq!(format_amount(dec!(1234.5)), "1,234.5");
        assert_eq!(format_amount(dec!(0.12345)), "0.123");
        assert_eq!(format_amount(dec!(2.0005)), "2.001");
        assert_eq!(format_amount(dec!(1500.000)), "1,500");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(format_period_end_date("2024-12-31"), "December 31, 2024");
        assert_eq!(format_period_end_date("2023-03-05"), "March 5, 2023");
    }

    #[test]
    fn test_empty_date_placeholder() {
        assert_eq!(format_period_end_date(""), PERIOD_NOT_SPECIFIED);
    }

    #[test]
    fn test_unparsable_date_echoed() {
        assert_eq!(format_period_end_date("FY2024"), "FY2024");
        assert_eq!(format_period_end_date(" "), " ");
    }
}
