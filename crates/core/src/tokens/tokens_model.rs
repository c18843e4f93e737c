use coinswap_market_data::{latest_per_currency, PriceSample};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tradable symbol with a unit price in the snapshot's common currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
}

impl Token {
    /// Creates a token whose display name is its symbol.
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            price,
        }
    }

    pub fn is_same_asset(&self, other: &Token) -> bool {
        self.symbol == other.symbol
    }
}

impl From<PriceSample> for Token {
    fn from(sample: PriceSample) -> Self {
        Token::new(sample.currency, sample.price)
    }
}

/// Reduces a raw snapshot to one token per symbol, keeping the most recent
/// sample of each currency in first-appearance order.
pub fn tokens_from_samples(samples: Vec<PriceSample>) -> Vec<Token> {
    latest_per_currency(samples)
        .into_iter()
        .map(Token::from)
        .collect()
}

/// Result of a price snapshot load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum PriceLoadOutcome {
    Loaded { count: usize },
    Failed { reason: String },
}

impl PriceLoadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, PriceLoadOutcome::Failed { .. })
    }
}
