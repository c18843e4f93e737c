use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits, at most one decimal point, digits. Matches every prefix of a
    /// non-negative decimal, including the empty string.
    static ref AMOUNT_INPUT_REGEX: Regex =
        Regex::new(r"^[0-9]*\.?[0-9]*$").expect("Invalid regex pattern");
}

/// Normalizes raw amount-field text: commas become decimal points.
/// Returns `None` if the result is not a (partial) non-negative decimal.
pub fn normalize_amount_input(raw: &str) -> Option<String> {
    let normalized = raw.replace(',', ".");
    AMOUNT_INPUT_REGEX
        .is_match(&normalized)
        .then_some(normalized)
}

/// Applies a keystroke-level edit to an amount field.
///
/// Valid input replaces the field. Invalid input keeps `previous` when that
/// is itself valid, otherwise the field resets to empty.
pub fn apply_amount_input(raw: &str, previous: &str) -> String {
    normalize_amount_input(raw)
        .or_else(|| normalize_amount_input(previous))
        .unwrap_or_default()
}
