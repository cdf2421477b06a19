//! Location handlers — read-only lookups

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use super::dto::{LocationDto, LocationQuery};
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse};
use crate::interfaces::http::router::ApiState;

#[utoipa::path(
    get,
    path = "/api/v1/locations/{id}",
    tag = "Locations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location details", body = ApiResponse<LocationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_location(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LocationDto>>, ApiError> {
    let location = state.locations.get_by_id(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(LocationDto::from(location))))
}

#[utoipa::path(
    get,
    path = "/api/v1/locations",
    tag = "Locations",
    security(("bearer_auth" = [])),
    params(LocationQuery),
    responses(
        (status = 200, description = "Matching locations", body = ApiResponse<Vec<LocationDto>>),
        (status = 400, description = "Neither name nor coordinates given")
    )
)]
pub async fn find_locations(
    State(state): State<ApiState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<ApiResponse<Vec<LocationDto>>>, ApiError> {
    let locations = match (query.x, query.y, query.name) {
        (Some(x), Some(y), _) => state
            .locations
            .find_by_coordinates(x, y)
            .await
            .map_err(domain_error)?
            .into_iter()
            .collect(),
        (_, _, Some(name)) => state
            .locations
            .find_by_name(&name)
            .await
            .map_err(domain_error)?,
        _ => {
            return Err(domain_error(DomainError::Validation(
                "Provide either name or both x and y".into(),
            )))
        }
    };

    Ok(Json(ApiResponse::success(
        locations.into_iter().map(LocationDto::from).collect(),
    )))
}
