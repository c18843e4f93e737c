use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::constants::{AMOUNT_DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};

/// Parses a user-entered amount.
///
/// Accepts the partial forms an amount field goes through while typing
/// (`".5"`, `"5."`) as well as exponent notation. Returns `None` for empty
/// or non-numeric text.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if let Some(rest) = trimmed.strip_prefix("-.") {
        format!("-0.{rest}")
    } else if let Some(rest) = trimmed.strip_prefix('.') {
        format!("0.{rest}")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Rounds half away from zero to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `value` with exactly `dp` decimal places (zero padded), never in
/// scientific notation.
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, round_half_up(value, dp))
}

/// Rounds to 8 decimal places and drops insignificant trailing zeros.
pub fn format_amount(value: Decimal) -> String {
    round_half_up(value, AMOUNT_DECIMAL_PRECISION)
        .normalize()
        .to_string()
}

/// Value of `amount` units at `price`, with 2 decimal places.
/// Returns `None` when the amount is empty or not a number.
pub fn usd_value(amount: &str, price: Decimal) -> Option<String> {
    let value = parse_amount(amount)?.checked_mul(price)?;
    Some(to_fixed(value, DISPLAY_DECIMAL_PRECISION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_forms() {
        assert_eq!(parse_amount("12.5"), Some(dec!(12.5)));
        assert_eq!(parse_amount(".5"), Some(dec!(0.5)));
        assert_eq!(parse_amount("5."), Some(dec!(5)));
        assert_eq!(parse_amount(" 3 "), Some(dec!(3)));
        assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }

    #[test]
    fn test_format_amount_rounds_and_trims() {
        assert_eq!(format_amount(dec!(2000.00000000)), "2000");
        assert_eq!(format_amount(dec!(0.123456789)), "0.12345679");
        assert_eq!(format_amount(dec!(0.000000004)), "0");
        assert_eq!(format_amount(dec!(0.000000005)), "0.00000001");
        assert_eq!(format_amount(dec!(1.10)), "1.1");
    }

    #[test]
    fn test_to_fixed_pads() {
        assert_eq!(to_fixed(dec!(1.5), 6), "1.500000");
        assert_eq!(to_fixed(dec!(0.000005), 20), "0.00000500000000000000");
        assert_eq!(to_fixed(dec!(2.345), 2), "2.35");
    }

    #[test]
    fn test_usd_value() {
        assert_eq!(usd_value("1.5", dec!(2000)), Some("3000.00".to_string()));
        assert_eq!(usd_value("0.001", dec!(1.2345)), Some("0.00".to_string()));
        assert_eq!(usd_value("", dec!(2000)), None);
    }
}
