//! Session authentication middleware
//!
//! Resolves `Authorization: Bearer <token>` through the session registry
//! and injects the acting user into request extensions. Routes behind this
//! middleware can rely on `Extension<AuthenticatedUser>` being present.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use super::common::ApiResponse;
use crate::domain::RepositoryProvider;
use crate::session::SharedSessionManager;

/// State for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    pub sessions: SharedSessionManager,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// The acting user resolved from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
}

/// The bearer token itself, kept around so logout can end the session.
#[derive(Clone, Copy, Debug)]
pub struct SessionToken(pub Uuid);

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok());

    let Some(token) = token else {
        return unauthorized("Missing or malformed session token");
    };

    let Some(user_id) = state.sessions.resolve(token) else {
        return unauthorized("Invalid or expired session");
    };

    // session may outlive the account
    let user = match state.repos.users().find_by_id(user_id).await {
        Ok(Some(user)) => user,
        _ => return unauthorized("Session user no longer exists"),
    };

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        username: user.username,
    });
    request.extensions_mut().insert(SessionToken(token));

    next.run(request).await
}
