//! Pinpoint handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use super::dto::{CreatePinpointRequest, EditCaptionRequest, PinpointDto, PostUpdateDto};
use crate::domain::PostUpdate;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::router::ApiState;

fn report(update: PostUpdate, applied: &str, denied: &str) -> PostUpdateDto {
    PostUpdateDto {
        message: if update.applied() { applied } else { denied }.to_string(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/pinpoints",
    tag = "Pinpoints",
    security(("bearer_auth" = [])),
    request_body = CreatePinpointRequest,
    responses(
        (status = 201, description = "Pinpoint posted", body = ApiResponse<PinpointDto>),
        (status = 404, description = "Pin does not exist")
    )
)]
pub async fn create_pinpoint(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreatePinpointRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PinpointDto>>), ApiError> {
    // posting onto a ghost pin is a hard failure
    state
        .pins
        .get_by_id(request.pin)
        .await
        .map_err(domain_error)?;

    let pinpoint = state
        .pinpoints
        .make_post(request.pin, &request.media, request.caption, Some(user.id))
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PinpointDto::from(pinpoint))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/pinpoints/mine",
    tag = "Pinpoints",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Posts by the current user", body = ApiResponse<Vec<PinpointDto>>))
)]
pub async fn my_pinpoints(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<PinpointDto>>>, ApiError> {
    let posts = state
        .pinpoints
        .find_by_user(user.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        posts.into_iter().map(PinpointDto::from).collect(),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/v1/pinpoints/{id}/caption",
    tag = "Pinpoints",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Pinpoint ID")),
    request_body = EditCaptionRequest,
    responses(
        (status = 200, description = "Edit attempted", body = ApiResponse<PostUpdateDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn edit_caption(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<EditCaptionRequest>,
) -> Result<Json<ApiResponse<PostUpdateDto>>, ApiError> {
    let update = state
        .pinpoints
        .edit_caption(id, request.caption, Some(user.id))
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(report(
        update,
        "Caption updated successfully",
        "Could not update caption",
    ))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/pinpoints/{id}",
    tag = "Pinpoints",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Pinpoint ID")),
    responses(
        (status = 200, description = "Delete attempted", body = ApiResponse<PostUpdateDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_pinpoint(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostUpdateDto>>, ApiError> {
    let update = state
        .pinpoints
        .delete_post(id, Some(user.id))
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(report(
        update,
        "Pinpoint deleted successfully",
        "Could not delete pinpoint",
    ))))
}
