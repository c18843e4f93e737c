use std::sync::Arc;
use std::time::Duration;

use coinswap_core::notifications::{ToastCenter, ToastKind};
use coinswap_core::swap::{SwapAction, SwapService, SwapServiceTrait};
use coinswap_core::tokens::{TokenService, TokenServiceTrait};
use coinswap_core::Error;
use coinswap_market_data::StaticPriceProvider;

const SNAPSHOT: &str = r#"[
    {"currency": "ETH", "date": "2023-08-29T07:10:40.000Z", "price": 1645.93},
    {"currency": "USDC", "date": "2023-08-29T07:10:30.000Z", "price": 0.99},
    {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 2000},
    {"currency": "USDC", "date": "2023-08-29T07:10:40.000Z", "price": 1},
    {"currency": "ATOM", "date": "2023-08-29T07:10:50.000Z", "price": 7.18}
]"#;

async fn start(delay: Duration) -> (Arc<TokenService>, Arc<SwapService>, Arc<ToastCenter>) {
    let toasts = Arc::new(ToastCenter::new(Duration::from_millis(4000)));
    let provider = StaticPriceProvider::from_json(SNAPSHOT).expect("snapshot parses");
    let tokens = Arc::new(TokenService::new(Arc::new(provider), toasts.clone()));
    tokens.load_tokens().await;
    let swap = Arc::new(SwapService::with_delay(tokens.clone(), toasts.clone(), delay));
    swap.apply_default_pair().await;
    (tokens, swap, toasts)
}

#[tokio::test(start_paused = true)]
async fn swap_round_trip_with_latest_prices() {
    let (tokens, swap, toasts) = start(Duration::from_millis(1500)).await;
    assert_eq!(tokens.get_tokens().len(), 3);

    let view = swap.view().await;
    assert_eq!(view.action, SwapAction::EnterAmount);
    assert_eq!(view.rate, "1 ETH = 2000 USDC");

    let view = swap.set_from_amount("1").await;
    assert_eq!(view.to_amount, "2000");
    assert_eq!(view.to_value.as_deref(), Some("2000.00"));

    let view = swap.flip().await;
    assert_eq!(view.from_token.as_ref().unwrap().symbol, "USDC");
    assert_eq!((view.from_amount.as_str(), view.to_amount.as_str()), ("2000", "1"));
    assert_eq!(view.rate, "1 USDC = 0.0005 ETH");

    let receipt = swap.submit().await.unwrap();
    assert_eq!(receipt.message, "Successfully swapped 2000 USDC to 1 ETH!");

    let view = swap.view().await;
    assert!(view.from_amount.is_empty() && view.to_amount.is_empty());
    assert_eq!(view.action, SwapAction::EnterAmount);
    assert_eq!(toasts.list()[0].kind, ToastKind::Success);
}

#[tokio::test(start_paused = true)]
async fn identical_tokens_never_succeed() {
    let (_, swap, toasts) = start(Duration::from_millis(1500)).await;
    swap.select_from_token("USDC").await.unwrap();

    for amount in ["", "0", "5", "123.45"] {
        swap.set_from_amount(amount).await;
        assert!(matches!(swap.submit().await, Err(Error::Swap(_))));
    }

    let shown = toasts.list();
    assert_eq!(shown.len(), 4);
    assert!(shown.iter().all(|t| t.kind == ToastKind::Error));
}

#[tokio::test(start_paused = true)]
async fn toasts_expire_after_ttl() {
    let (_, swap, toasts) = start(Duration::from_millis(10)).await;
    swap.set_from_amount("0.5").await;
    swap.submit().await.unwrap();
    assert_eq!(toasts.list().len(), 1);

    tokio::time::sleep(Duration::from_millis(4001)).await;
    assert!(toasts.list().is_empty());
}

#[tokio::test]
async fn failed_price_load_disables_swapping() {
    let toasts = Arc::new(ToastCenter::default());
    let tokens = Arc::new(TokenService::new(
        Arc::new(StaticPriceProvider::failing("HTTP 503")),
        toasts.clone(),
    ));
    assert!(tokens.load_tokens().await.is_failed());

    let swap = SwapService::new(tokens, toasts.clone());
    let view = swap.apply_default_pair().await;
    assert_eq!(view.action, SwapAction::SelectToken);
    assert_eq!(view.rate, "-");
    assert_eq!(toasts.list().len(), 1);
}
