//! Pin handlers — reads; placement and removal go through the map routes

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use super::dto::PinDto;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse};
use crate::interfaces::http::modules::pinpoints::dto::PinpointDto;
use crate::interfaces::http::router::ApiState;

#[utoipa::path(
    get,
    path = "/api/v1/pins/{id}",
    tag = "Pins",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Pin ID")),
    responses(
        (status = 200, description = "Pin details", body = ApiResponse<PinDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_pin(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PinDto>>, ApiError> {
    let pin = state.pins.get_by_id(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(PinDto::from(pin))))
}

#[utoipa::path(
    get,
    path = "/api/v1/pins/{id}/pinpoints",
    tag = "Pins",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Pin ID")),
    responses((status = 200, description = "Posts on this pin", body = ApiResponse<Vec<PinpointDto>>))
)]
pub async fn get_pin_pinpoints(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PinpointDto>>>, ApiError> {
    let posts = state.pinpoints.find_by_pin(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        posts.into_iter().map(PinpointDto::from).collect(),
    )))
}
