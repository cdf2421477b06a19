//! Collection repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Collection;
use crate::domain::DomainResult;

#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn create(&self, collection: Collection) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Collection>>;
    /// Name uniqueness makes this a single-record lookup.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Collection>>;
    /// All collections the user is a member of, most recently updated first.
    async fn find_for_user(&self, user: Uuid) -> DomainResult<Vec<Collection>>;
    /// Whole-record replacement; the store stamps `updated_at`.
    async fn update(&self, collection: Collection) -> DomainResult<()>;
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
