use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use coinswap_core::constants::{DEFAULT_ICON_BASE_URL, SWAP_DELAY, TOAST_TTL};
use coinswap_core::settings::Theme;
use coinswap_market_data::DEFAULT_PRICE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub price_url: String,
    pub icon_base_url: String,
    pub prefs_path: PathBuf,
    pub default_theme: Theme,
    pub swap_delay: Duration,
    pub toast_ttl: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            price_url: DEFAULT_PRICE_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            prefs_path: PathBuf::from("./data/preferences.json"),
            default_theme: Theme::Dark,
            swap_delay: SWAP_DELAY,
            toast_ttl: TOAST_TTL,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            log_format: "text".to_string(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_millis(key: &str, default: Duration) -> Duration {
    env_var(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

impl Config {
    /// Reads `CS_*` variables, loading `.env` first. Unset variables keep
    /// their defaults; a malformed listen address or theme is an error.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match env_var("CS_LISTEN_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid CS_LISTEN_ADDR '{}'", raw))?,
            None => defaults.listen_addr,
        };
        let default_theme = match env_var("CS_DEFAULT_THEME") {
            Some(raw) => Theme::from_str(&raw)
                .with_context(|| format!("Invalid CS_DEFAULT_THEME '{}'", raw))?,
            None => defaults.default_theme,
        };
        let cors_allow = env_var("CS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            price_url: env_var("CS_PRICE_URL").unwrap_or(defaults.price_url),
            icon_base_url: env_var("CS_ICON_BASE_URL").unwrap_or(defaults.icon_base_url),
            prefs_path: env_var("CS_PREFS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.prefs_path),
            default_theme,
            swap_delay: env_millis("CS_SWAP_DELAY_MS", defaults.swap_delay),
            toast_ttl: env_millis("CS_TOAST_TTL_MS", defaults.toast_ttl),
            cors_allow,
            request_timeout: env_millis("CS_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            log_format: env_var("CS_LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }
}
