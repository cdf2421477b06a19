//! User repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn find_all(&self) -> DomainResult<Vec<User>>;
    /// Whole-record replacement; the store stamps `updated_at`.
    async fn update(&self, user: User) -> DomainResult<()>;
}
