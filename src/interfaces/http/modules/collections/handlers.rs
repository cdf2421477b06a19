//! Collection handlers
//!
//! Name-keyed routes: the client shares and fills collections by name, the
//! service resolves and gates every access on membership.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use super::dto::{CollectionDto, CreateCollectionRequest};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::router::ApiState;

#[utoipa::path(
    post,
    path = "/api/v1/collections",
    tag = "Collections",
    security(("bearer_auth" = [])),
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = ApiResponse<CollectionDto>),
        (status = 409, description = "Name taken")
    )
)]
pub async fn create_collection(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CollectionDto>>), ApiError> {
    let collection = state
        .collections
        .create(user.id, &request.name)
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CollectionDto::from(collection))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/collections",
    tag = "Collections",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Collections the user belongs to", body = ApiResponse<Vec<CollectionDto>>))
)]
pub async fn my_collections(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<CollectionDto>>>, ApiError> {
    let collections = state
        .collections
        .list_for_user(user.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        collections.into_iter().map(CollectionDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/collections/{name}",
    tag = "Collections",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Collection name")),
    responses(
        (status = 200, description = "Collection details", body = ApiResponse<CollectionDto>),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_collection(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<CollectionDto>>, ApiError> {
    let collection = state
        .collections
        .get_by_name(&name, user.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(CollectionDto::from(collection))))
}

#[utoipa::path(
    put,
    path = "/api/v1/collections/{name}/pins/{pin_id}",
    tag = "Collections",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Collection name"),
        ("pin_id" = Uuid, Path, description = "Pin ID")
    ),
    responses(
        (status = 200, description = "Pin added", body = ApiResponse<CollectionDto>),
        (status = 404, description = "Collection or pin not found")
    )
)]
pub async fn add_pin_to_collection(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((name, pin_id)): Path<(String, Uuid)>,
) -> Result<Json<ApiResponse<CollectionDto>>, ApiError> {
    let collection = state
        .collections
        .get_by_name(&name, user.id)
        .await
        .map_err(domain_error)?;
    // a ghost pin must not enter the bag
    state.pins.get_by_id(pin_id).await.map_err(domain_error)?;

    let collection = state
        .collections
        .add_pin(collection.id, user.id, pin_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(CollectionDto::from(collection))))
}

#[utoipa::path(
    put,
    path = "/api/v1/collections/{name}/users/{username}",
    tag = "Collections",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Collection name"),
        ("username" = String, Path, description = "User to grant access")
    ),
    responses(
        (status = 200, description = "Access granted", body = ApiResponse<CollectionDto>),
        (status = 404, description = "Collection or user not found")
    )
)]
pub async fn share_collection(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((name, username)): Path<(String, String)>,
) -> Result<Json<ApiResponse<CollectionDto>>, ApiError> {
    let new_user = state
        .users
        .get_by_username(&username)
        .await
        .map_err(domain_error)?;
    let collection = state
        .collections
        .get_by_name(&name, user.id)
        .await
        .map_err(domain_error)?;

    let collection = state
        .collections
        .add_user(collection.id, user.id, new_user.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(CollectionDto::from(collection))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/collections/{name}",
    tag = "Collections",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Collection name")),
    responses(
        (status = 200, description = "Collection deleted"),
        (status = 403, description = "Not a member")
    )
)]
pub async fn delete_collection(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let collection = state
        .collections
        .get_by_name(&name, user.id)
        .await
        .map_err(domain_error)?;
    state
        .collections
        .delete(collection.id, user.id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}
