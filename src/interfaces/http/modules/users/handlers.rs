//! Auth and user handlers
//!
//! Thin wrappers over `UserService`; register and login are the only
//! routes outside the session middleware.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{LoginRequest, RegisterRequest, SessionDto, UpdateUserRequest, UserDto};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{AuthenticatedUser, SessionToken};
use crate::interfaces::http::router::ApiState;

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 409, description = "Username taken")
    )
)]
pub async fn register(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let user = state
        .users
        .register(&request.username, &request.password)
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserDto::from(user))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = ApiResponse<SessionDto>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<SessionDto>>, ApiError> {
    let auth = state
        .users
        .login(&request.username, &request.password)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(SessionDto {
        token: auth.token,
        user: UserDto::from(auth.user),
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Session closed"))
)]
pub async fn logout(
    State(state): State<ApiState>,
    Extension(token): Extension<SessionToken>,
) -> Json<ApiResponse<()>> {
    state.users.logout(token.0);
    Json(ApiResponse::success(()))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Current user", body = ApiResponse<UserDto>))
)]
pub async fn session_user(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state.users.get_by_id(user.id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All users", body = ApiResponse<Vec<UserDto>>))
)]
pub async fn list_users(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, ApiError> {
    let users = state.users.list().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        users.into_iter().map(UserDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<ApiState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state
        .users
        .get_by_username(&username)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(UserDto::from(user))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 409, description = "Username taken")
    )
)]
pub async fn update_user(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let updated = state
        .users
        .update_username(user.id, &request.username)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(UserDto::from(updated))))
}
