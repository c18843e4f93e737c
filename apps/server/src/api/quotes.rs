//! Stateless conversion endpoints. They do not touch the swap form.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use coinswap_core::{
    errors::Error as CoreError,
    swap::{convert_back, convert_forward, exchange_rate, exchange_rate_label, normalize_amount_input},
    tokens::Token,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum Direction {
    /// `amount` is in `from` units
    #[default]
    Forward,
    /// `amount` is in `to` units
    Backward,
}

#[derive(Deserialize)]
struct QuoteQuery {
    from: String,
    to: String,
    amount: String,
    #[serde(default)]
    direction: Direction,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    from: String,
    to: String,
    amount: String,
    direction: Direction,
    /// Absent when the amount is empty or a price is zero
    result: Option<String>,
    rate: String,
}

#[derive(Deserialize)]
struct PairQuery {
    from: String,
    to: String,
}

#[derive(Serialize)]
struct RateResponse {
    label: String,
    rate: Option<Decimal>,
}

fn lookup(state: &AppState, symbol: &str) -> ApiResult<Token> {
    state
        .token_service
        .get_token(symbol)
        .ok_or_else(|| CoreError::TokenNotFound(symbol.to_string()).into())
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<QuoteResponse>> {
    let from = lookup(&state, &query.from)?;
    let to = lookup(&state, &query.to)?;
    let amount = normalize_amount_input(&query.amount)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid amount '{}'", query.amount)))?;

    let result = match query.direction {
        Direction::Forward => convert_forward(&amount, Some(&from), Some(&to)),
        Direction::Backward => convert_back(&amount, Some(&from), Some(&to)),
    };

    Ok(Json(QuoteResponse {
        rate: exchange_rate_label(Some(&from), Some(&to)),
        from: from.symbol,
        to: to.symbol,
        amount,
        direction: query.direction,
        result,
    }))
}

async fn get_rate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PairQuery>,
) -> ApiResult<Json<RateResponse>> {
    let from = lookup(&state, &query.from)?;
    let to = lookup(&state, &query.to)?;
    Ok(Json(RateResponse {
        label: exchange_rate_label(Some(&from), Some(&to)),
        rate: exchange_rate(&from, &to),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quote", get(get_quote))
        .route("/rate", get(get_rate))
}
