use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::{SwapError, SwapForm, SwapServiceTrait, SwapView};
use crate::constants::SWAP_DELAY;
use crate::errors::{Error, Result};
use crate::notifications::{ToastCenter, ToastKind};
use crate::tokens::TokenServiceTrait;

/// Confirmation of a completed (simulated) swap.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapReceipt {
    pub from_symbol: String,
    pub from_amount: String,
    pub to_symbol: String,
    pub to_amount: String,
    pub message: String,
}

/// Clears the in-flight flag when the submission ends, including when the
/// submitting future is dropped mid-delay.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The swap widget session: form state plus the simulated submission.
pub struct SwapService {
    tokens: Arc<dyn TokenServiceTrait>,
    toasts: Arc<ToastCenter>,
    form: Mutex<SwapForm>,
    in_flight: AtomicBool,
    delay: Duration,
}

impl SwapService {
    pub fn new(tokens: Arc<dyn TokenServiceTrait>, toasts: Arc<ToastCenter>) -> Self {
        Self::with_delay(tokens, toasts, SWAP_DELAY)
    }

    pub fn with_delay(
        tokens: Arc<dyn TokenServiceTrait>,
        toasts: Arc<ToastCenter>,
        delay: Duration,
    ) -> Self {
        Self {
            tokens,
            toasts,
            form: Mutex::new(SwapForm::new()),
            in_flight: AtomicBool::new(false),
            delay,
        }
    }

    fn view_of(&self, form: &SwapForm) -> SwapView {
        form.view(self.is_in_flight())
    }

    fn reject(&self, err: SwapError) -> Error {
        if let Some(message) = err.user_message() {
            self.toasts.push(ToastKind::Error, message);
        }
        debug!("Swap rejected: {}", err);
        Error::Swap(err)
    }
}

#[async_trait]
impl SwapServiceTrait for SwapService {
    async fn view(&self) -> SwapView {
        let form = self.form.lock().await;
        self.view_of(&form)
    }

    async fn set_from_amount(&self, raw: &str) -> SwapView {
        let mut form = self.form.lock().await;
        form.set_from_amount(raw);
        self.view_of(&form)
    }

    async fn set_to_amount(&self, raw: &str) -> SwapView {
        let mut form = self.form.lock().await;
        form.set_to_amount(raw);
        self.view_of(&form)
    }

    async fn select_from_token(&self, symbol: &str) -> Result<SwapView> {
        let token = self
            .tokens
            .get_token(symbol)
            .ok_or_else(|| Error::TokenNotFound(symbol.to_string()))?;
        let mut form = self.form.lock().await;
        form.select_from_token(Some(token));
        Ok(self.view_of(&form))
    }

    async fn select_to_token(&self, symbol: &str) -> Result<SwapView> {
        let token = self
            .tokens
            .get_token(symbol)
            .ok_or_else(|| Error::TokenNotFound(symbol.to_string()))?;
        let mut form = self.form.lock().await;
        form.select_to_token(Some(token));
        Ok(self.view_of(&form))
    }

    async fn flip(&self) -> SwapView {
        let mut form = self.form.lock().await;
        form.flip();
        self.view_of(&form)
    }

    async fn apply_default_pair(&self) -> SwapView {
        let (from, to) = self.tokens.default_pair();
        let mut form = self.form.lock().await;
        form.reset_tokens(from, to);
        self.view_of(&form)
    }

    async fn submit(&self) -> Result<SwapReceipt> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::Swap(SwapError::InFlight));
        }
        let _guard = InFlightGuard(&self.in_flight);

        let (from, to, from_amount, to_amount) = {
            let form = self.form.lock().await;
            let (from, to) = match (form.from_token(), form.to_token()) {
                (Some(from), Some(to)) => (from.clone(), to.clone()),
                _ => return Err(self.reject(SwapError::InvalidAmount)),
            };
            if !form.has_positive_amount() {
                return Err(self.reject(SwapError::InvalidAmount));
            }
            if from.is_same_asset(&to) {
                return Err(self.reject(SwapError::SameToken));
            }
            (
                from,
                to,
                form.from_amount().to_string(),
                form.to_amount().to_string(),
            )
        };

        info!(
            "Simulating swap of {} {} to {} {}",
            from_amount, from.symbol, to_amount, to.symbol
        );
        tokio::time::sleep(self.delay).await;

        self.form.lock().await.clear_amounts();

        let message = format!(
            "Successfully swapped {} {} to {} {}!",
            from_amount, from.symbol, to_amount, to.symbol
        );
        self.toasts.push(ToastKind::Success, message.clone());

        Ok(SwapReceipt {
            from_symbol: from.symbol,
            from_amount,
            to_symbol: to.symbol,
            to_amount,
            message,
        })
    }

    fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INVALID_AMOUNT_MESSAGE, SAME_TOKEN_MESSAGE};
    use crate::tokens::TokenService;
    use coinswap_market_data::{PriceSample, StaticPriceProvider};
    use rust_decimal_macros::dec;

    async fn session() -> (Arc<SwapService>, Arc<ToastCenter>) {
        let toasts = Arc::new(ToastCenter::default());
        let provider = StaticPriceProvider::new(vec![
            PriceSample::new("ETH", "2024-01-02", dec!(2000)),
            PriceSample::new("USDC", "2024-01-02", dec!(1)),
        ]);
        let tokens = Arc::new(TokenService::new(Arc::new(provider), toasts.clone()));
        tokens.load_tokens().await;
        let swap = Arc::new(SwapService::new(tokens, toasts.clone()));
        swap.apply_default_pair().await;
        (swap, toasts)
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_swap_clears_amounts() {
        let (swap, toasts) = session().await;
        swap.set_from_amount("1").await;

        let receipt = swap.submit().await.unwrap();
        assert_eq!(receipt.to_amount, "2000");
        assert_eq!(receipt.message, "Successfully swapped 1 ETH to 2000 USDC!");

        let view = swap.view().await;
        assert_eq!(view.from_amount, "");
        assert_eq!(view.to_amount, "");
        assert!(!swap.is_in_flight());

        let shown = toasts.list();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, ToastKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let (swap, _) = session().await;
        swap.set_from_amount("1").await;

        let started = tokio::time::Instant::now();
        swap.submit().await.unwrap();
        assert!(started.elapsed() >= SWAP_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_token_always_fails() {
        let (swap, toasts) = session().await;
        swap.select_to_token("ETH").await.unwrap();

        for amount in ["1", "", "0"] {
            swap.set_from_amount(amount).await;
            let err = swap.submit().await.unwrap_err();
            assert!(matches!(err, Error::Swap(_)));
        }

        swap.set_from_amount("1").await;
        let err = swap.submit().await.unwrap_err();
        assert!(matches!(err, Error::Swap(SwapError::SameToken)));
        assert!(toasts.list().iter().all(|t| t.kind == ToastKind::Error));
        assert_eq!(toasts.list().last().unwrap().message, SAME_TOKEN_MESSAGE);
        // Nothing was cleared.
        assert_eq!(swap.view().await.from_amount, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_amount_is_checked_before_same_token() {
        let (swap, toasts) = session().await;
        swap.select_to_token("ETH").await.unwrap();

        for amount in ["", "0"] {
            swap.set_from_amount(amount).await;
            let err = swap.submit().await.unwrap_err();
            assert!(matches!(err, Error::Swap(SwapError::InvalidAmount)));
            assert_eq!(toasts.list().last().unwrap().message, INVALID_AMOUNT_MESSAGE);
        }
        assert_eq!(toasts.list().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_positive_amount_is_rejected() {
        let (swap, toasts) = session().await;
        swap.set_from_amount("0").await;

        let err = swap.submit().await.unwrap_err();
        assert!(matches!(err, Error::Swap(SwapError::InvalidAmount)));
        assert_eq!(toasts.list()[0].message, INVALID_AMOUNT_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_one_submission_in_flight() {
        let (swap, _) = session().await;
        swap.set_from_amount("1").await;

        let first = tokio::spawn({
            let swap = swap.clone();
            async move { swap.submit().await }
        });
        tokio::task::yield_now().await;
        assert!(swap.is_in_flight());
        assert_eq!(swap.view().await.action, crate::swap::SwapAction::Swapping);

        let second = swap.submit().await.unwrap_err();
        assert!(matches!(second, Error::Swap(SwapError::InFlight)));

        assert!(first.await.unwrap().is_ok());
        assert!(!swap.is_in_flight());
    }

    #[tokio::test]
    async fn test_unknown_token_selection() {
        let (swap, _) = session().await;
        let err = swap.select_from_token("DOGE").await.unwrap_err();
        assert!(matches!(err, Error::TokenNotFound(ref s) if s == "DOGE"));
    }

    #[tokio::test]
    async fn test_end_to_end_flip() {
        let (swap, _) = session().await;
        let view = swap.set_from_amount("1").await;
        assert_eq!(view.to_amount, "2000");

        let view = swap.flip().await;
        assert_eq!(view.from_token.unwrap().symbol, "USDC");
        assert_eq!(view.to_token.unwrap().symbol, "ETH");
        assert_eq!(view.from_amount, "2000");
        assert_eq!(view.to_amount, "1");
    }
}
