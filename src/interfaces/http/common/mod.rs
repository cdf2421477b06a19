//! Shared HTTP plumbing — response envelope and error mapping

pub mod validated_json;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

pub use validated_json::ValidatedJson;

/// Standard response envelope for all REST endpoints.
///
/// Success: `{"success": true, "data": {...}}`;
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// HTTP status for each hard-failure kind. Soft refusals never reach this
/// mapping — they ride a 200 with an explanatory message.
pub fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } | DomainError::MissingAttribute { .. } => {
            StatusCode::NOT_FOUND
        }
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
    }
}

pub fn domain_error(error: DomainError) -> ApiError {
    (
        error_status(&error),
        Json(ApiResponse::error(error.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn hard_failures_map_to_distinct_statuses() {
        assert_eq!(
            error_status(&DomainError::missing("Map", Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&DomainError::MissingAttribute {
                entity: "Pin",
                id: Uuid::new_v4(),
                attribute: "location",
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&DomainError::Validation("empty".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::Conflict("taken".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_status(&DomainError::Forbidden("not a member".into())),
            StatusCode::FORBIDDEN
        );
    }
}
