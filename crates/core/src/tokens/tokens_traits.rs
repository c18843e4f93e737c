use async_trait::async_trait;

use super::{PriceLoadOutcome, Token};

/// Trait defining the contract for token operations.
#[async_trait]
pub trait TokenServiceTrait: Send + Sync {
    /// Fetches the price snapshot and replaces the token set wholesale.
    /// Never fails: a fetch error leaves an empty set and is reported in
    /// the outcome.
    async fn load_tokens(&self) -> PriceLoadOutcome;

    fn get_tokens(&self) -> Vec<Token>;

    /// Case-insensitive substring match on the symbol. An empty query
    /// returns every token.
    fn search_tokens(&self, query: &str) -> Vec<Token>;

    fn get_token(&self, symbol: &str) -> Option<Token>;

    /// The tokens preselected after a load (sell side, buy side).
    fn default_pair(&self) -> (Option<Token>, Option<Token>);
}
