use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::vacancy_dto::{SearchQuery, VacancyDetailResponse, VacancyListResponse},
    error::Result,
    utils::time,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/vacancies",
    params(
        ("page" = Option<u32>, Query, description = "Page number, 1-based"),
        ("per_page" = Option<u32>, Query, description = "Items per page"),
        ("keyword" = Option<String>, Query, description = "Free-text search"),
        ("province" = Option<String>, Query, description = "Province code (kode_provinsi)"),
        ("regency" = Option<String>, Query, description = "Regency code (kode_kabupaten)")
    ),
    responses(
        (status = 200, description = "Page of vacancy cards", body = VacancyListResponse),
        (status = 400, description = "Invalid query"),
        (status = 502, description = "Upstream failed")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let search = query.into_search(state.config.default_per_page, state.config.max_per_page)?;
    let page = state.maganghub_service.search(&search).await?;
    Ok(Json(VacancyListResponse::from_page(&page, time::now())))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = String, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = VacancyDetailResponse),
        (status = 404, description = "Vacancy not found"),
        (status = 502, description = "Upstream failed")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let record = state.maganghub_service.fetch_detail(&id).await?;
    Ok(Json(VacancyDetailResponse::from_record(record, time::now())))
}
