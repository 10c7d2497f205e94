use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::region_dto::RegencyListResponse,
    error::{Error, Result},
    utils::validation::region_code,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/regions/{province}/regencies",
    params(
        ("province" = String, Path, description = "Province code (kode_provinsi)")
    ),
    responses(
        (status = 200, description = "Regencies of the province", body = RegencyListResponse),
        (status = 400, description = "Invalid province code"),
        (status = 502, description = "Upstream failed")
    )
)]
#[axum::debug_handler]
pub async fn list_regencies(
    State(state): State<AppState>,
    Path(province): Path<String>,
) -> Result<impl IntoResponse> {
    let province = region_code(Some(province.as_str()), "province")?
        .ok_or_else(|| Error::BadRequest("province must not be empty".to_string()))?;
    let regencies = state.maganghub_service.regencies(&province).await?;
    Ok(Json(RegencyListResponse {
        province,
        items: regencies.as_ref().clone(),
    }))
}
