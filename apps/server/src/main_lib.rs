use std::sync::Arc;

use coinswap_core::{
    icons::IconResolver,
    notifications::ToastCenter,
    settings::{FilePreferenceStore, ThemeService, ThemeServiceTrait},
    swap::{SwapService, SwapServiceTrait},
    tokens::{PriceLoadOutcome, TokenService, TokenServiceTrait},
};
use coinswap_market_data::{PriceProvider, SnapshotPriceProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub token_service: Arc<dyn TokenServiceTrait>,
    pub swap_service: Arc<dyn SwapServiceTrait>,
    pub toasts: Arc<ToastCenter>,
    pub theme_service: Arc<dyn ThemeServiceTrait>,
    pub icon_resolver: Arc<IconResolver>,
}

impl AppState {
    /// Fetches prices again and re-selects the default pair.
    pub async fn reload_tokens(&self) -> PriceLoadOutcome {
        let outcome = self.token_service.load_tokens().await;
        self.swap_service.apply_default_pair().await;
        outcome
    }
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(SnapshotPriceProvider::new(config.price_url.clone()));
    tracing::info!("Price snapshot source: {}", provider.url());
    build_state_with_provider(config, provider).await
}

/// Wires the services around `provider` and performs the initial price load.
/// A failed load is not fatal: the server starts with an empty token set and
/// an error toast.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn PriceProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let toasts = Arc::new(ToastCenter::new(config.toast_ttl));

    let token_service: Arc<dyn TokenServiceTrait> =
        Arc::new(TokenService::new(provider, toasts.clone()));
    let swap_service: Arc<dyn SwapServiceTrait> = Arc::new(SwapService::with_delay(
        token_service.clone(),
        toasts.clone(),
        config.swap_delay,
    ));

    tracing::info!("Preferences file: {}", config.prefs_path.display());
    let prefs = Arc::new(FilePreferenceStore::new(config.prefs_path.clone()));
    let theme_service: Arc<dyn ThemeServiceTrait> =
        Arc::new(ThemeService::new(prefs, config.default_theme));
    let icon_resolver = Arc::new(IconResolver::new(config.icon_base_url.clone()));

    let state = Arc::new(AppState {
        token_service,
        swap_service,
        toasts,
        theme_service,
        icon_resolver,
    });

    match state.reload_tokens().await {
        PriceLoadOutcome::Loaded { count } => tracing::info!("Loaded {} tokens", count),
        PriceLoadOutcome::Failed { reason } => {
            tracing::warn!("Starting without prices: {}", reason)
        }
    }

    Ok(state)
}
