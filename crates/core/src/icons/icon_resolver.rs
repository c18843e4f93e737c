use dashmap::DashMap;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::constants::DEFAULT_ICON_BASE_URL;
use crate::tokens::Token;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Neutral glyph served when a token has no icon.
pub const PLACEHOLDER_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32"><circle cx="16" cy="16" r="15" fill="#6b7280"/><circle cx="16" cy="16" r="7" fill="none" stroke="#e5e7eb" stroke-width="2"/></svg>"##;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TokenIcon {
    Remote { url: String },
    Placeholder,
}

/// `<base>/<SYMBOL>.svg`
pub fn icon_url(base: &str, symbol: &str) -> String {
    format!("{}/{}.svg", base.trim_end_matches('/'), symbol)
}

fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Resolves token icons, probing each URL once and remembering the answer.
///
/// Only loaded tokens can be resolved, so the cache never outgrows the
/// token set.
pub struct IconResolver {
    client: Client,
    base_url: String,
    cache: DashMap<String, TokenIcon>,
}

impl IconResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            cache: DashMap::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cached(&self, symbol: &str) -> Option<TokenIcon> {
        self.cache.get(symbol).map(|entry| entry.value().clone())
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Never fails: an unreachable, missing or malformed icon resolves to
    /// [`TokenIcon::Placeholder`].
    pub async fn resolve(&self, token: &Token) -> TokenIcon {
        let symbol = token.symbol.as_str();
        if !is_valid_symbol(symbol) {
            return TokenIcon::Placeholder;
        }
        if let Some(icon) = self.cached(symbol) {
            return icon;
        }

        let url = icon_url(&self.base_url, symbol);
        let icon = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => TokenIcon::Remote { url },
            Ok(response) => {
                debug!("No icon for {} (HTTP {})", symbol, response.status());
                TokenIcon::Placeholder
            }
            Err(e) => {
                debug!("Icon probe for {} failed: {}", symbol, e);
                TokenIcon::Placeholder
            }
        };

        self.cache.insert(symbol.to_string(), icon.clone());
        icon
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_BASE_URL)
    }
}
