//! Location registry — coordinate dedup and lookups

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Location, RepositoryProvider};

/// Service for the location registry.
///
/// Guards the one-record-per-coordinate invariant: creation goes through
/// [`get_or_create`](Self::get_or_create), which returns the existing record
/// untouched when one already sits at the requested coordinates.
pub struct LocationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LocationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Get-or-create by exact coordinates. Idempotent: the second caller
    /// gets the first caller's record, and the existing name is never
    /// overwritten. The boolean reports whether a record was created.
    ///
    /// Best-effort under races: two concurrent first-uses of the same
    /// coordinates can each miss the lookup and both create.
    pub async fn get_or_create(
        &self,
        x: f64,
        y: f64,
        name: Option<String>,
    ) -> DomainResult<(Location, bool)> {
        if let Some(existing) = self.repos.locations().find_by_coordinates(x, y).await? {
            return Ok((existing, false));
        }

        let location = Location::new(x, y, name);
        self.repos.locations().create(location.clone()).await?;
        info!("Location created at ({}, {}): {}", x, y, location.id);
        Ok((location, true))
    }

    /// Unconditional delete. An absent id is a no-op success; referencing
    /// maps are not cleaned up (dangling ids are tolerated on read paths).
    pub async fn sanitize(&self, id: Uuid) -> DomainResult<()> {
        self.repos.locations().delete(id).await
    }

    pub async fn get_coordinates(&self, id: Uuid) -> DomainResult<(f64, f64)> {
        let location = self.require(id).await?;
        Ok((location.x, location.y))
    }

    /// `None` when the location legally has no name; hard `NotFound` when
    /// the id itself does not resolve.
    pub async fn get_name(&self, id: Uuid) -> DomainResult<Option<String>> {
        Ok(self.require(id).await?.name)
    }

    pub async fn find_by_coordinates(&self, x: f64, y: f64) -> DomainResult<Option<Location>> {
        self.repos.locations().find_by_coordinates(x, y).await
    }

    pub async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Location>> {
        self.repos.locations().find_by_name(name).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Location> {
        self.require(id).await
    }

    async fn require(&self, id: Uuid) -> DomainResult<Location> {
        self.repos
            .locations()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("Location", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryProvider;

    fn service() -> LocationService {
        LocationService::new(Arc::new(InMemoryProvider::new()))
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let svc = service();
        let (first, created) = svc.get_or_create(3.0, 4.0, None).await.unwrap();
        assert!(created);
        let (second, created) = svc.get_or_create(3.0, 4.0, None).await.unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);
        // exactly one record at these coordinates
        let found = svc.find_by_coordinates(3.0, 4.0).await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn existing_name_is_not_overwritten() {
        let svc = service();
        let (first, _) = svc
            .get_or_create(1.0, 2.0, Some("harbor".into()))
            .await
            .unwrap();
        let (second, _) = svc
            .get_or_create(1.0, 2.0, Some("docks".into()))
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.name.as_deref(), Some("harbor"));
    }

    #[tokio::test]
    async fn get_name_distinguishes_missing_record_from_missing_name() {
        let svc = service();
        let (anon, _) = svc.get_or_create(0.0, 0.0, None).await.unwrap();
        assert_eq!(svc.get_name(anon.id).await.unwrap(), None);
        assert!(matches!(
            svc.get_name(Uuid::new_v4()).await,
            Err(DomainError::NotFound { entity: "Location", .. })
        ));
    }

    #[tokio::test]
    async fn sanitize_absent_record_is_noop_success() {
        let svc = service();
        svc.sanitize(Uuid::new_v4()).await.unwrap();

        let (loc, _) = svc.get_or_create(5.0, 5.0, None).await.unwrap();
        svc.sanitize(loc.id).await.unwrap();
        assert!(svc.find_by_coordinates(5.0, 5.0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_name_returns_all_matches() {
        let svc = service();
        svc.get_or_create(1.0, 1.0, Some("cafe".into())).await.unwrap();
        svc.get_or_create(2.0, 2.0, Some("cafe".into())).await.unwrap();
        svc.get_or_create(3.0, 3.0, Some("park".into())).await.unwrap();
        assert_eq!(svc.find_by_name("cafe").await.unwrap().len(), 2);
    }
}
