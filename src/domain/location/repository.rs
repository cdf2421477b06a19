//! Location repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Location;
use crate::domain::DomainResult;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, location: Location) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Location>>;
    async fn find_by_coordinates(&self, x: f64, y: f64) -> DomainResult<Option<Location>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Location>>;
    /// Deleting an absent record is a no-op success.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
