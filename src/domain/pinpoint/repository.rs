//! Pinpoint repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Pinpoint;
use crate::domain::DomainResult;

#[async_trait]
pub trait PinpointRepository: Send + Sync {
    async fn create(&self, pinpoint: Pinpoint) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Pinpoint>>;
    /// Posts on a pin, most recently updated first.
    async fn find_by_pin(&self, pin: Uuid) -> DomainResult<Vec<Pinpoint>>;
    /// Posts authored by a user, most recently updated first.
    async fn find_by_user(&self, user: Uuid) -> DomainResult<Vec<Pinpoint>>;
    /// Whole-record replacement; the store stamps `updated_at`.
    async fn update(&self, pinpoint: Pinpoint) -> DomainResult<()>;
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
