use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use coinswap_core::settings::Theme;
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize, Deserialize)]
struct ThemeBody {
    theme: Theme,
}

async fn get_theme(State(state): State<Arc<AppState>>) -> ApiResult<Json<ThemeBody>> {
    let theme = state.theme_service.theme()?;
    Ok(Json(ThemeBody { theme }))
}

async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ThemeBody>,
) -> ApiResult<Json<ThemeBody>> {
    let theme = state.theme_service.set_theme(body.theme)?;
    Ok(Json(ThemeBody { theme }))
}

async fn toggle_theme(State(state): State<Arc<AppState>>) -> ApiResult<Json<ThemeBody>> {
    let theme = state.theme_service.toggle_theme()?;
    tracing::debug!("Theme switched to {}", theme);
    Ok(Json(ThemeBody { theme }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings/theme", get(get_theme).put(set_theme))
        .route("/settings/theme/toggle", post(toggle_theme))
}
