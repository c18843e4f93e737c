use async_trait::async_trait;
use coinswap_market_data::PriceProvider;
use log::{info, warn};
use std::sync::{Arc, PoisonError, RwLock};

use super::{tokens_from_samples, PriceLoadOutcome, Token, TokenServiceTrait};
use crate::constants::{DEFAULT_FROM_SYMBOL, DEFAULT_TO_SYMBOL, PRICE_LOAD_FAILED_MESSAGE};
use crate::notifications::{ToastCenter, ToastKind};

/// Holds the token set derived from the latest price snapshot.
pub struct TokenService {
    provider: Arc<dyn PriceProvider>,
    toasts: Arc<ToastCenter>,
    tokens: RwLock<Vec<Token>>,
}

impl TokenService {
    pub fn new(provider: Arc<dyn PriceProvider>, toasts: Arc<ToastCenter>) -> Self {
        Self {
            provider,
            toasts,
            tokens: RwLock::new(Vec::new()),
        }
    }

    fn replace_tokens(&self, tokens: Vec<Token>) {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = tokens;
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    async fn load_tokens(&self) -> PriceLoadOutcome {
        match self.provider.fetch_samples().await {
            Ok(samples) => {
                let sample_count = samples.len();
                let tokens = tokens_from_samples(samples);
                let count = tokens.len();
                info!(
                    "Loaded {} tokens from {} price samples ({})",
                    count,
                    sample_count,
                    self.provider.id()
                );
                self.replace_tokens(tokens);
                PriceLoadOutcome::Loaded { count }
            }
            Err(e) => {
                warn!("Error fetching prices from {}: {}", self.provider.id(), e);
                self.replace_tokens(Vec::new());
                self.toasts.push(ToastKind::Error, PRICE_LOAD_FAILED_MESSAGE);
                PriceLoadOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn get_tokens(&self) -> Vec<Token> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn search_tokens(&self, query: &str) -> Vec<Token> {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        if query.is_empty() {
            return tokens.clone();
        }
        let needle = query.to_lowercase();
        tokens
            .iter()
            .filter(|t| t.symbol.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn get_token(&self, symbol: &str) -> Option<Token> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|t| t.symbol == symbol)
            .cloned()
    }

    fn default_pair(&self) -> (Option<Token>, Option<Token>) {
        (
            self.get_token(DEFAULT_FROM_SYMBOL),
            self.get_token(DEFAULT_TO_SYMBOL),
        )
    }
}
