//! Pinpoint DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Pinpoint;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePinpointRequest {
    pub pin: Uuid,
    /// Media URL rendered by the frontend
    #[validate(length(min = 1, max = 2048, message = "media URL is required"))]
    pub media: String,
    #[validate(length(max = 500, message = "caption must be at most 500 characters"))]
    pub caption: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EditCaptionRequest {
    #[validate(length(max = 500, message = "caption must be at most 500 characters"))]
    pub caption: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PinpointDto {
    pub id: Uuid,
    pub pin: Uuid,
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Uuid>,
}

impl From<Pinpoint> for PinpointDto {
    fn from(pinpoint: Pinpoint) -> Self {
        Self {
            id: pinpoint.id,
            pin: pinpoint.pin,
            media: pinpoint.media,
            caption: pinpoint.caption,
            user: pinpoint.user,
        }
    }
}

/// Outcome report for owner-gated mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostUpdateDto {
    pub message: String,
}
