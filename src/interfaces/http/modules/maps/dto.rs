//! Map DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::MapMutation;
use crate::domain::{Map, Selection};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMapRequest {
    /// Seed location references, defaults to empty
    #[serde(default)]
    pub locations: Vec<Uuid>,
    /// Seed pin references, defaults to empty
    #[serde(default)]
    pub pins: Vec<Uuid>,
    pub curr_location: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SelectCoordinatesRequest {
    pub x: f64,
    pub y: f64,
    #[validate(length(min = 1, max = 100, message = "location name must be 1–100 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MapDto {
    pub id: Uuid,
    pub locations: Vec<Uuid>,
    pub pins: Vec<Uuid>,
    pub curr_location: Option<Uuid>,
}

impl From<Map> for MapDto {
    fn from(map: Map) -> Self {
        Self {
            id: map.id,
            locations: map.locations,
            pins: map.pins,
            curr_location: map.curr_location,
        }
    }
}

/// A mutation report: what happened plus the post-mutation snapshot.
#[derive(Debug, Serialize, ToSchema)]
pub struct MapMutationDto {
    pub message: String,
    pub map: MapDto,
}

impl From<MapMutation> for MapMutationDto {
    fn from(mutation: MapMutation) -> Self {
        Self {
            message: mutation.event.message().to_string(),
            map: MapDto::from(mutation.map),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionDto {
    pub curr_location: Option<Uuid>,
}

impl From<Selection> for SelectionDto {
    fn from(selection: Selection) -> Self {
        Self {
            curr_location: match selection {
                Selection::Selected(location) => Some(location),
                Selection::Idle => None,
            },
        }
    }
}

/// Resolved coordinates of a pin on the map.
#[derive(Debug, Serialize, ToSchema)]
pub struct PinCoordinatesDto {
    pub pin: Uuid,
    pub x: f64,
    pub y: f64,
}

/// Result of the remove-pin composite: the registry's verdict on the pin
/// record plus the map unlink report.
#[derive(Debug, Serialize, ToSchema)]
pub struct RemovePinDto {
    pub pin_removal: String,
    pub message: String,
    pub map: MapDto,
}
