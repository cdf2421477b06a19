//! Map handlers
//!
//! Owns the three cross-registry flows from the client's point of view:
//! clicking coordinates (materialize location, toggle selection), dropping
//! a pin at the current selection, and removing a pin (sanitize attempt
//! followed by the map unlink, which is not ownership-gated).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use super::dto::{
    CreateMapRequest, MapDto, MapMutationDto, PinCoordinatesDto, RemovePinDto, SelectionDto,
    SelectCoordinatesRequest,
};
use crate::domain::Selection;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::router::ApiState;

#[utoipa::path(
    post,
    path = "/api/v1/maps",
    tag = "Maps",
    security(("bearer_auth" = [])),
    request_body = CreateMapRequest,
    responses((status = 201, description = "Map created", body = ApiResponse<MapDto>))
)]
pub async fn create_map(
    State(state): State<ApiState>,
    Json(request): Json<CreateMapRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MapDto>>), ApiError> {
    let map = state
        .maps
        .create(request.locations, request.pins, request.curr_location)
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MapDto::from(map))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/maps/{id}",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses(
        (status = 200, description = "Map details", body = ApiResponse<MapDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_map(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MapDto>>, ApiError> {
    let map = state.maps.get_map(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(MapDto::from(map))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/maps/{id}",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Map deleted"))
)]
pub async fn delete_map(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.maps.sanitize(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    get,
    path = "/api/v1/maps/{id}/locations",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Location references", body = ApiResponse<Vec<Uuid>>))
)]
pub async fn get_map_locations(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Uuid>>>, ApiError> {
    let locations = state.maps.get_locations(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(locations)))
}

#[utoipa::path(
    get,
    path = "/api/v1/maps/{id}/pins",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Pin references", body = ApiResponse<Vec<Uuid>>))
)]
pub async fn get_map_pins(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Uuid>>>, ApiError> {
    let pins = state.maps.get_pins(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(pins)))
}

#[utoipa::path(
    get,
    path = "/api/v1/maps/{id}/pins/locations",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Coordinates of every resolvable pin", body = ApiResponse<Vec<PinCoordinatesDto>>))
)]
pub async fn get_pin_locations(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PinCoordinatesDto>>>, ApiError> {
    let pins = state.maps.get_pins(id).await.map_err(domain_error)?;

    // dangling references are tolerated: a pin or location deleted out from
    // under the map is skipped, not a crash
    let mut coordinates = Vec::with_capacity(pins.len());
    for pin in pins {
        let Ok(location) = state.pins.get_location(pin).await else {
            continue;
        };
        let Ok((x, y)) = state.locations.get_coordinates(location).await else {
            continue;
        };
        coordinates.push(PinCoordinatesDto { pin, x, y });
    }
    Ok(Json(ApiResponse::success(coordinates)))
}

#[utoipa::path(
    get,
    path = "/api/v1/maps/{id}/selection",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Current selection", body = ApiResponse<SelectionDto>))
)]
pub async fn get_selection(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SelectionDto>>, ApiError> {
    let selection = state.maps.get_selection(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(SelectionDto::from(selection))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/maps/{id}/selection",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    request_body = SelectCoordinatesRequest,
    responses((status = 200, description = "Selection toggled", body = ApiResponse<MapMutationDto>))
)]
pub async fn select_coordinates(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<SelectCoordinatesRequest>,
) -> Result<Json<ApiResponse<MapMutationDto>>, ApiError> {
    let (location, _) = state
        .locations
        .get_or_create(request.x, request.y, request.name)
        .await
        .map_err(domain_error)?;
    let mutation = state
        .maps
        .select_location(id, location.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(MapMutationDto::from(mutation))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/maps/{id}/selection",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Selection cleared (or reported empty)", body = ApiResponse<MapMutationDto>))
)]
pub async fn deselect(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MapMutationDto>>, ApiError> {
    let mutation = state
        .maps
        .deselect_location(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(MapMutationDto::from(mutation))))
}

#[utoipa::path(
    post,
    path = "/api/v1/maps/{id}/pins",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Map ID")),
    responses((status = 200, description = "Pin dropped (or refusal reported)", body = ApiResponse<MapMutationDto>))
)]
pub async fn drop_pin(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MapMutationDto>>, ApiError> {
    let selection = state.maps.get_selection(id).await.map_err(domain_error)?;

    let Selection::Selected(location) = selection else {
        // soft refusal: the prompt was never open
        let map = state.maps.get_map(id).await.map_err(domain_error)?;
        return Ok(Json(ApiResponse::success(MapMutationDto {
            message: "Cannot drop a pin with no location selected".into(),
            map: map.into(),
        })));
    };

    let (pin, _) = state
        .pins
        .drop_pin(Some(user.id), Some(location))
        .await
        .map_err(domain_error)?;
    let mutation = state
        .maps
        .add_pin(id, pin.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(MapMutationDto::from(mutation))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/maps/{id}/pins/{pin_id}",
    tag = "Maps",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Map ID"),
        ("pin_id" = Uuid, Path, description = "Pin ID")
    ),
    responses((status = 200, description = "Removal attempted", body = ApiResponse<RemovePinDto>))
)]
pub async fn remove_pin(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, pin_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<RemovePinDto>>, ApiError> {
    // the registry decides whether the record dies; the map unlink happens
    // either way (an owned pin still disappears from this map)
    let outcome = state
        .pins
        .sanitize(pin_id, Some(user.id))
        .await
        .map_err(domain_error)?;
    let mutation = state
        .maps
        .remove_pin(id, pin_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(RemovePinDto {
        pin_removal: outcome.message().to_string(),
        message: mutation.event.message().to_string(),
        map: MapDto::from(mutation.map),
    })))
}
