//! Pin repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Pin;
use crate::domain::DomainResult;

#[async_trait]
pub trait PinRepository: Send + Sync {
    async fn create(&self, pin: Pin) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Pin>>;
    /// At most one pin references a location, so a single-record lookup.
    async fn find_by_location(&self, location: Uuid) -> DomainResult<Option<Pin>>;
    /// Deleting an absent record is a no-op success.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
