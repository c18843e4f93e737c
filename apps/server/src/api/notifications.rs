use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use coinswap_core::notifications::Toast;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn list_notifications(State(state): State<Arc<AppState>>) -> Json<Vec<Toast>> {
    Json(state.toasts.list())
}

async fn dismiss_notification(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.toasts.dismiss(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/{id}", delete(dismiss_notification))
}
