//! HTTP snapshot provider.
//!
//! Fetches a static JSON array of `{currency, date, price}` objects with a
//! single GET request. No authentication, no pagination and no retries.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::PriceSample;
use crate::provider::PriceProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "SNAPSHOT";

/// Default location of the price snapshot
pub const DEFAULT_PRICE_URL: &str = "https://interview.switcheo.com/prices.json";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Price provider backed by a static JSON document served over HTTP.
///
/// # Example
///
/// ```ignore
/// use coinswap_market_data::provider::snapshot::SnapshotPriceProvider;
///
/// let provider = SnapshotPriceProvider::default();
/// let samples = provider.fetch_samples().await?;
/// ```
pub struct SnapshotPriceProvider {
    client: Client,
    url: String,
}

impl SnapshotPriceProvider {
    /// Create a provider reading the snapshot at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    /// Create a provider reusing an existing HTTP client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode a snapshot body.
    fn parse_body(body: &[u8]) -> Result<Vec<PriceSample>, MarketDataError> {
        serde_json::from_slice(body).map_err(|e| MarketDataError::InvalidPayload {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for SnapshotPriceProvider {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_URL)
    }
}

#[async_trait]
impl PriceProvider for SnapshotPriceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_samples(&self) -> Result<Vec<PriceSample>, MarketDataError> {
        debug!("Fetching price snapshot from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let samples = Self::parse_body(&body)?;
        debug!("Price snapshot contained {} samples", samples.len());
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = SnapshotPriceProvider::default();
        assert_eq!(provider.id(), "SNAPSHOT");
        assert_eq!(provider.url(), DEFAULT_PRICE_URL);
    }

    #[test]
    fn test_parse_body() {
        let body = br#"[
            {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.9337373737374},
            {"currency":"USDC","date":"2023-08-29T07:10:30.000Z","price":1}
        ]"#;
        let samples = SnapshotPriceProvider::parse_body(body).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].currency, "USDC");
        assert_eq!(samples[1].price, dec!(1));
    }

    #[test]
    fn test_parse_body_rejects_non_array() {
        let err = SnapshotPriceProvider::parse_body(br#"{"error":"nope"}"#).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidPayload { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let provider = SnapshotPriceProvider::new("http://127.0.0.1:1/prices.json");
        let result = provider.fetch_samples().await;
        assert!(result.is_err());
    }
}
