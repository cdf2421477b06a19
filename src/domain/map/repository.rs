//! Map repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Map;
use crate::domain::DomainResult;

#[async_trait]
pub trait MapRepository: Send + Sync {
    async fn create(&self, map: Map) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Map>>;
    /// Whole-record replacement; the store stamps `updated_at`.
    async fn update(&self, map: Map) -> DomainResult<()>;
    /// Deleting an absent record is a no-op success.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
