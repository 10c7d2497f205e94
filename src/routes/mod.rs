pub mod docs;
pub mod health;
pub mod region;
pub mod vacancy;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::{
    cors::read_only_cors,
    rate_limit::{budget_middleware, RequestBudget},
};
use crate::AppState;

/// Full HTTP surface. Detail and regency routes are only mounted when the
/// matching capability is enabled.
pub fn router(state: AppState) -> Router {
    let capabilities = state.config.capabilities;

    let mut upstream_api = Router::new().route("/api/vacancies", get(vacancy::list_vacancies));
    if capabilities.detail_view {
        upstream_api = upstream_api.route("/api/vacancies/:id", get(vacancy::get_vacancy));
    }
    if capabilities.regency_filter {
        upstream_api = upstream_api.route(
            "/api/regions/:province/regencies",
            get(region::list_regencies),
        );
    }
    let upstream_api = upstream_api.layer(axum::middleware::from_fn_with_state(
        RequestBudget::new(state.config.public_rps),
        budget_middleware,
    ));

    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(docs::openapi_json))
        .merge(upstream_api)
        .with_state(state)
        .layer(read_only_cors())
        .layer(TraceLayer::new_for_http())
}
