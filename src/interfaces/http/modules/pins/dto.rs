//! Pin DTOs

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Pin;

#[derive(Debug, Serialize, ToSchema)]
pub struct PinDto {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Uuid>,
}

impl From<Pin> for PinDto {
    fn from(pin: Pin) -> Self {
        Self {
            id: pin.id,
            user: pin.user,
            location: pin.location,
        }
    }
}
