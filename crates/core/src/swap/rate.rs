//! Human-readable exchange rates.
//!
//! Rates between tokens span many orders of magnitude (a memecoin priced in
//! ETH is easily below 1e-8), so small rates are printed with just enough
//! decimals to reach their first significant digit instead of collapsing
//! to zero or switching to exponent notation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::amount::to_fixed;
use super::converter::exchange_rate;
use crate::constants::RATE_DECIMAL_PRECISION;
use crate::tokens::Token;

/// Decimal places used to locate the first significant digit of a small rate
const PROBE_DECIMALS: u32 = 20;

/// Decimal places used when a small rate has no significant digit within
/// `PROBE_DECIMALS`
const FALLBACK_DECIMALS: u32 = 10;

/// Rates below this are formatted up to their first significant digit
const SMALL_RATE_THRESHOLD: Decimal = dec!(0.0001);

/// Formats an exchange rate for display.
///
/// - zero renders as `"0"`;
/// - rates below 0.0001 keep decimals up to and including the first
///   significant digit (`0.000005` -> `"0.000005"`);
/// - everything else gets 6 decimal places with trailing zeros removed
///   (`1.5` -> `"1.5"`, `2` -> `"2"`).
pub fn format_rate(rate: Decimal) -> String {
    if rate.is_zero() {
        return "0".to_string();
    }

    if rate < SMALL_RATE_THRESHOLD {
        let probe = to_fixed(rate, PROBE_DECIMALS);
        return match probe.find(|c: char| matches!(c, '1'..='9')) {
            Some(idx) if idx > 0 => to_fixed(rate, (idx - 1) as u32),
            _ => to_fixed(rate, FALLBACK_DECIMALS),
        };
    }

    let fixed = to_fixed(rate, RATE_DECIMAL_PRECISION);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// `"1 FROM = N TO"`, or `"-"` when either side is missing or the rate is
/// undefined.
pub fn exchange_rate_label(from: Option<&Token>, to: Option<&Token>) -> String {
    match (from, to) {
        (Some(from), Some(to)) => match exchange_rate(from, to) {
            Some(rate) => format!("1 {} = {} {}", from.symbol, format_rate(rate), to.symbol),
            None => "-".to_string(),
        },
        _ => "-".to_string(),
    }
}
