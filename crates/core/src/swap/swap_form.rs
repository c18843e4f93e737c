use serde::Serialize;

use super::amount::{parse_amount, usd_value};
use super::converter::{convert_back, convert_forward};
use super::input::apply_amount_input;
use super::rate::exchange_rate_label;
use crate::tokens::Token;

/// State of the swap widget.
///
/// Whenever both tokens are selected and the edited amount is a number, the
/// opposite amount holds the converted value. Each setter recomputes the
/// opposite field from the one that was just edited; the two are never set
/// independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwapForm {
    from_token: Option<Token>,
    to_token: Option<Token>,
    from_amount: String,
    to_amount: String,
}

impl SwapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_token(&self) -> Option<&Token> {
        self.from_token.as_ref()
    }

    pub fn to_token(&self) -> Option<&Token> {
        self.to_token.as_ref()
    }

    pub fn from_amount(&self) -> &str {
        &self.from_amount
    }

    pub fn to_amount(&self) -> &str {
        &self.to_amount
    }

    /// Edits the sell amount and recomputes the buy amount.
    pub fn set_from_amount(&mut self, raw: &str) {
        self.from_amount = apply_amount_input(raw, &self.from_amount);
        self.recompute_to_amount();
    }

    /// Edits the buy amount and recomputes the sell amount.
    pub fn set_to_amount(&mut self, raw: &str) {
        self.to_amount = apply_amount_input(raw, &self.to_amount);
        self.recompute_from_amount();
    }

    /// Selects the sell token; the buy amount follows the sell amount.
    pub fn select_from_token(&mut self, token: Option<Token>) {
        self.from_token = token;
        self.recompute_to_amount();
    }

    /// Selects the buy token; the sell amount follows the buy amount.
    pub fn select_to_token(&mut self, token: Option<Token>) {
        self.to_token = token;
        self.recompute_from_amount();
    }

    /// Swaps sides: tokens and amounts trade places.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    /// Replaces both tokens (e.g. after a price reload) keeping the sell
    /// amount as the source of truth.
    pub fn reset_tokens(&mut self, from: Option<Token>, to: Option<Token>) {
        self.from_token = from;
        self.to_token = to;
        self.recompute_to_amount();
    }

    pub fn clear_amounts(&mut self) {
        self.from_amount.clear();
        self.to_amount.clear();
    }

    /// State of the submit button, ignoring any in-flight submission.
    pub fn action(&self) -> SwapAction {
        if self.from_token.is_none() || self.to_token.is_none() {
            SwapAction::SelectToken
        } else if self.from_amount.is_empty() {
            SwapAction::EnterAmount
        } else {
            SwapAction::Swap
        }
    }

    /// True when the sell amount is a number greater than zero.
    pub fn has_positive_amount(&self) -> bool {
        parse_amount(&self.from_amount).is_some_and(|v| v.is_sign_positive() && !v.is_zero())
    }

    pub fn rate_label(&self) -> String {
        exchange_rate_label(self.from_token.as_ref(), self.to_token.as_ref())
    }

    /// Serializable snapshot for display.
    pub fn view(&self, in_flight: bool) -> SwapView {
        let action = if in_flight {
            SwapAction::Swapping
        } else {
            self.action()
        };
        SwapView {
            from_token: self.from_token.clone(),
            to_token: self.to_token.clone(),
            from_amount: self.from_amount.clone(),
            to_amount: self.to_amount.clone(),
            from_value: self
                .from_token
                .as_ref()
                .and_then(|t| usd_value(&self.from_amount, t.price)),
            to_value: self
                .to_token
                .as_ref()
                .and_then(|t| usd_value(&self.to_amount, t.price)),
            rate: self.rate_label(),
            action,
            can_submit: action.is_enabled(),
        }
    }

    fn recompute_to_amount(&mut self) {
        self.to_amount = convert_forward(
            &self.from_amount,
            self.from_token.as_ref(),
            self.to_token.as_ref(),
        )
        .unwrap_or_default();
    }

    fn recompute_from_amount(&mut self) {
        self.from_amount = convert_back(
            &self.to_amount,
            self.from_token.as_ref(),
            self.to_token.as_ref(),
        )
        .unwrap_or_default();
    }
}

/// What the submit button offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SwapAction {
    SelectToken,
    EnterAmount,
    Swapping,
    Swap,
}

impl SwapAction {
    pub fn label(&self) -> &'static str {
        match self {
            SwapAction::SelectToken => "Select Token",
            SwapAction::EnterAmount => "Enter Amount",
            SwapAction::Swapping => "Swapping...",
            SwapAction::Swap => "Swap",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, SwapAction::Swap)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapView {
    pub from_token: Option<Token>,
    pub to_token: Option<Token>,
    pub from_amount: String,
    pub to_amount: String,
    /// Fiat value of the sell amount, 2 decimals
    pub from_value: Option<String>,
    /// Fiat value of the buy amount, 2 decimals
    pub to_value: Option<String>,
    pub rate: String,
    pub action: SwapAction,
    pub can_submit: bool,
}
