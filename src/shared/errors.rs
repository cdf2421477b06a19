use thiserror::Error;
use uuid::Uuid;

/// Hard-failure channel for all registries.
///
/// Soft refusals (ownership mismatch on pin removal, deselect with nothing
/// selected, ...) never travel through this enum; they are reported as
/// tagged outcome variants on the operation result instead.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity} {id} has no {attribute}")]
    MissingAttribute {
        entity: &'static str,
        id: Uuid,
        attribute: &'static str,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl DomainError {
    /// Standard not-found error for an id lookup miss.
    pub fn missing(entity: &'static str, id: Uuid) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }
}
