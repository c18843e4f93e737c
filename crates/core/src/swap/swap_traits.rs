use async_trait::async_trait;

use super::{SwapReceipt, SwapView};
use crate::errors::Result;

/// Trait defining the contract for the swap widget session.
#[async_trait]
pub trait SwapServiceTrait: Send + Sync {
    async fn view(&self) -> SwapView;

    async fn set_from_amount(&self, raw: &str) -> SwapView;

    async fn set_to_amount(&self, raw: &str) -> SwapView;

    async fn select_from_token(&self, symbol: &str) -> Result<SwapView>;

    async fn select_to_token(&self, symbol: &str) -> Result<SwapView>;

    async fn flip(&self) -> SwapView;

    /// Re-selects the default pair from the current token set.
    async fn apply_default_pair(&self) -> SwapView;

    /// Runs the simulated swap. Resolves after the configured delay.
    async fn submit(&self) -> Result<SwapReceipt>;

    fn is_in_flight(&self) -> bool;
}
