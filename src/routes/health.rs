use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let capabilities = state.maganghub_service.capabilities();
    let body = json!({
        "status": "ok",
        "regency_filter": capabilities.regency_filter,
        "detail_view": capabilities.detail_view,
    });
    (StatusCode::OK, Json(body))
}
