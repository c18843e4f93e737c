use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use coinswap_core::swap::{SwapReceipt, SwapView};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct AmountBody {
    value: String,
}

#[derive(Deserialize)]
struct TokenBody {
    symbol: String,
}

async fn get_swap(State(state): State<Arc<AppState>>) -> Json<SwapView> {
    Json(state.swap_service.view().await)
}

async fn set_from_amount(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AmountBody>,
) -> Json<SwapView> {
    Json(state.swap_service.set_from_amount(&body.value).await)
}

async fn set_to_amount(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AmountBody>,
) -> Json<SwapView> {
    Json(state.swap_service.set_to_amount(&body.value).await)
}

async fn select_from_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TokenBody>,
) -> ApiResult<Json<SwapView>> {
    Ok(Json(state.swap_service.select_from_token(&body.symbol).await?))
}

async fn select_to_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TokenBody>,
) -> ApiResult<Json<SwapView>> {
    Ok(Json(state.swap_service.select_to_token(&body.symbol).await?))
}

async fn flip(State(state): State<Arc<AppState>>) -> Json<SwapView> {
    Json(state.swap_service.flip().await)
}

async fn submit(State(state): State<Arc<AppState>>) -> ApiResult<Json<SwapReceipt>> {
    let receipt = state.swap_service.submit().await?;
    tracing::info!("{}", receipt.message);
    Ok(Json(receipt))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/swap", get(get_swap))
        .route("/swap/from-amount", put(set_from_amount))
        .route("/swap/to-amount", put(set_to_amount))
        .route("/swap/from-token", put(select_from_token))
        .route("/swap/to-token", put(select_to_token))
        .route("/swap/flip", post(flip))
        .route("/swap/submit", post(submit))
}
