//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::collection::CollectionRepository;
use super::location::LocationRepository;
use super::map::MapRepository;
use super::pin::PinRepository;
use super::pinpoint::PinpointRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let map = repos.maps().find_by_id(map_id).await?;
///     let pin = repos.pins().find_by_location(location_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn locations(&self) -> &dyn LocationRepository;
    fn pins(&self) -> &dyn PinRepository;
    fn maps(&self) -> &dyn MapRepository;
    fn collections(&self) -> &dyn CollectionRepository;
    fn pinpoints(&self) -> &dyn PinpointRepository;
    fn users(&self) -> &dyn UserRepository;
}
