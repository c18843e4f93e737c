//! Bidirectional amount conversion between two independently priced tokens.
//!
//! Both directions go through the common quote currency:
//! `target_amount = source_amount * source.price / target.price`.

use rust_decimal::Decimal;

use super::amount::{format_amount, parse_amount};
use crate::tokens::Token;

/// Multiplies `amount` by `numerator / denominator`. `None` on a zero
/// denominator or overflow.
fn scale_by_ratio(amount: Decimal, numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    amount.checked_mul(numerator)?.checked_div(denominator)
}

/// Converts an amount of `from` into the equivalent amount of `to`.
///
/// Returns `None` when the amount is empty or not a number, either token is
/// missing, or `to` has a zero price.
pub fn convert_forward(amount: &str, from: Option<&Token>, to: Option<&Token>) -> Option<String> {
    let (from, to) = (from?, to?);
    let value = parse_amount(amount)?;
    scale_by_ratio(value, from.price, to.price).map(format_amount)
}

/// Converts an amount of `to` back into the equivalent amount of `from`.
///
/// This is the inverse of [`convert_forward`] for the same token pair and
/// fails under the mirrored conditions (zero `from` price).
pub fn convert_back(amount: &str, from: Option<&Token>, to: Option<&Token>) -> Option<String> {
    let (from, to) = (from?, to?);
    let value = parse_amount(amount)?;
    scale_by_ratio(value, to.price, from.price).map(format_amount)
}

/// Price of one `from` unit expressed in `to` units.
pub fn exchange_rate(from: &Token, to: &Token) -> Option<Decimal> {
    from.price.checked_div(to.price)
}
