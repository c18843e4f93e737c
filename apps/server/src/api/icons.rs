use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use coinswap_core::icons::{TokenIcon, PLACEHOLDER_ICON_SVG};

use crate::main_lib::AppState;

/// Redirects to the token's icon, or serves a neutral glyph when it has none.
/// Symbols outside the loaded token set get the glyph without any lookup.
async fn get_icon(Path(symbol): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let icon = match state.token_service.get_token(&symbol) {
        Some(token) => state.icon_resolver.resolve(&token).await,
        None => TokenIcon::Placeholder,
    };
    match icon {
        TokenIcon::Remote { url } => Redirect::temporary(&url).into_response(),
        TokenIcon::Placeholder => (
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, "max-age=3600"),
            ],
            PLACEHOLDER_ICON_SVG,
        )
            .into_response(),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/icons/{symbol}", get(get_icon))
}
