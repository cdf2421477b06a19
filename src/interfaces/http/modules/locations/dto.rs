//! Location DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::Location;

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationDto {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            x: location.x,
            y: location.y,
            name: location.name,
        }
    }
}

/// Lookup filter: either a name or an exact coordinate pair.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationQuery {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}
