//! Collection DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Collection;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 100, message = "collection name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionDto {
    pub id: Uuid,
    pub name: String,
    pub users: Vec<Uuid>,
    pub pins: Vec<Uuid>,
}

impl From<Collection> for CollectionDto {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            users: collection.users,
            pins: collection.pins,
        }
    }
}
