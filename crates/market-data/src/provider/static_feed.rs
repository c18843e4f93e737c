use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceSample;
use crate::provider::PriceProvider;

const PROVIDER_ID: &str = "STATIC";

/// Serves a fixed snapshot from memory.
///
/// Built either from samples or as a provider that always fails, which is
/// how callers exercise the degraded (empty token list) path.
pub struct StaticPriceProvider {
    samples: Vec<PriceSample>,
    failure: Option<String>,
}

impl StaticPriceProvider {
    pub fn new(samples: Vec<PriceSample>) -> Self {
        Self {
            samples,
            failure: None,
        }
    }

    /// A provider whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            samples: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Loads samples from a JSON snapshot document.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let samples = serde_json::from_str(json).map_err(|e| MarketDataError::InvalidPayload {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(samples))
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_samples(&self) -> Result<Vec<PriceSample>, MarketDataError> {
        match &self.failure {
            Some(message) => Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: message.clone(),
            }),
            None => Ok(self.samples.clone()),
        }
    }
}
