use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use coinswap_core::tokens::{PriceLoadOutcome, Token};
use serde::Deserialize;

use crate::main_lib::AppState;

#[derive(Deserialize)]
struct SearchQuery {
    search: Option<String>,
}

async fn list_tokens(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Token>> {
    let search = query.search.unwrap_or_default();
    Json(state.token_service.search_tokens(search.trim()))
}

async fn reload_tokens(State(state): State<Arc<AppState>>) -> Json<PriceLoadOutcome> {
    Json(state.reload_tokens().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tokens", get(list_tokens))
        .route("/tokens/reload", post(reload_tokens))
}
