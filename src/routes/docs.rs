use axum::response::{IntoResponse, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::vacancy::list_vacancies,
        crate::routes::vacancy::get_vacancy,
        crate::routes::region::list_regencies,
    ),
    info(
        title = "MagangHub directory",
        description = "Normalized, paginated view of active MagangHub internship vacancies"
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
