//! Price provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceSample;

/// Trait for price snapshot providers.
///
/// A provider returns the raw samples of one snapshot, duplicates included.
/// Reduction to one sample per currency is done by the caller via
/// [`latest_per_currency`](crate::models::latest_per_currency).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use coinswap_market_data::{MarketDataError, PriceProvider, PriceSample};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl PriceProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_samples(&self) -> Result<Vec<PriceSample>, MarketDataError> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, used for logging and errors.
    fn id(&self) -> &'static str;

    /// Fetch the full price snapshot.
    async fn fetch_samples(&self) -> Result<Vec<PriceSample>, MarketDataError>;
}
