//! Collection access layer — membership-gated pin sets

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Collection, DomainError, DomainResult, RepositoryProvider};

/// Service for collections.
///
/// Every operation except `create` runs through the membership gate:
/// an unresolved id is a hard `NotFound`, a non-member a hard `Forbidden`.
pub struct CollectionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CollectionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a collection owned by `creator`. Names are globally unique
    /// and must be non-empty.
    pub async fn create(&self, creator: Uuid, name: &str) -> DomainResult<Collection> {
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Name of collection must be non-empty".into(),
            ));
        }
        if self.repos.collections().find_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Collection with name {} already exists",
                name
            )));
        }

        let collection = Collection::new(name.to_string(), creator);
        self.repos.collections().create(collection.clone()).await?;
        info!("Collection '{}' created by {}", name, creator);
        Ok(collection)
    }

    /// The gate used by every other operation.
    pub async fn can_access(&self, id: Uuid, user: Uuid) -> DomainResult<Collection> {
        let collection = self
            .repos
            .collections()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("Collection", id))?;

        if !collection.is_member(user) {
            return Err(DomainError::Forbidden(format!(
                "User {} cannot access collection {}",
                user, id
            )));
        }
        Ok(collection)
    }

    /// Grant membership. Adding an existing member is a no-op — membership
    /// is a set, duplicates never accumulate.
    pub async fn add_user(
        &self,
        id: Uuid,
        acting_user: Uuid,
        new_user: Uuid,
    ) -> DomainResult<Collection> {
        let mut collection = self.can_access(id, acting_user).await?;
        if collection.add_member(new_user) {
            self.repos.collections().update(collection).await?;
            info!("User {} added to collection {}", new_user, id);
        }
        self.post_state(id).await
    }

    /// Add a pin reference. Same set semantics as membership.
    pub async fn add_pin(&self, id: Uuid, acting_user: Uuid, pin: Uuid) -> DomainResult<Collection> {
        let mut collection = self.can_access(id, acting_user).await?;
        if collection.add_pin(pin) {
            self.repos.collections().update(collection).await?;
            info!("Pin {} added to collection {}", pin, id);
        }
        self.post_state(id).await
    }

    /// Resolve by name, then gate.
    pub async fn get_by_name(&self, name: &str, user: Uuid) -> DomainResult<Collection> {
        let collection = self
            .repos
            .collections()
            .find_by_name(name)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Collection",
                field: "name",
                value: name.to_string(),
            })?;
        self.can_access(collection.id, user).await
    }

    /// All collections the user belongs to, most recently updated first.
    pub async fn list_for_user(&self, user: Uuid) -> DomainResult<Vec<Collection>> {
        self.repos.collections().find_for_user(user).await
    }

    pub async fn delete(&self, id: Uuid, user: Uuid) -> DomainResult<()> {
        self.can_access(id, user).await?;
        self.repos.collections().delete(id).await?;
        info!("Collection {} deleted by {}", id, user);
        Ok(())
    }

    async fn post_state(&self, id: Uuid) -> DomainResult<Collection> {
        self.repos
            .collections()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("Collection", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryProvider;

    fn service() -> CollectionService {
        CollectionService::new(Arc::new(InMemoryProvider::new()))
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let svc = service();
        assert!(matches!(
            svc.create(Uuid::new_v4(), "").await,
            Err(DomainError::Validation(_))
        ));
    }

    // The sharing scenario: create, conflict, gate, grant, read.
    #[tokio::test]
    async fn membership_gates_access_until_granted() {
        let svc = service();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        let trip = svc.create(u1, "trip").await.unwrap();
        assert_eq!(trip.users, vec![u1]);

        assert!(matches!(
            svc.create(u2, "trip").await,
            Err(DomainError::Conflict(_))
        ));

        assert!(matches!(
            svc.get_by_name("trip", u2).await,
            Err(DomainError::Forbidden(_))
        ));

        let trip = svc.add_user(trip.id, u1, u2).await.unwrap();
        assert_eq!(trip.users, vec![u1, u2]);

        let seen = svc.get_by_name("trip", u2).await.unwrap();
        assert_eq!(seen.id, trip.id);
    }

    #[tokio::test]
    async fn repeated_adds_do_not_accumulate() {
        let svc = service();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let pin = Uuid::new_v4();

        let c = svc.create(u1, "dedup").await.unwrap();
        svc.add_user(c.id, u1, u2).await.unwrap();
        let after = svc.add_user(c.id, u1, u2).await.unwrap();
        assert_eq!(after.users, vec![u1, u2]);

        svc.add_pin(c.id, u1, pin).await.unwrap();
        let after = svc.add_pin(c.id, u2, pin).await.unwrap();
        assert_eq!(after.pins, vec![pin]);
    }

    #[tokio::test]
    async fn non_member_cannot_mutate_or_delete() {
        let svc = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let c = svc.create(owner, "private").await.unwrap();

        assert!(matches!(
            svc.add_pin(c.id, stranger, Uuid::new_v4()).await,
            Err(DomainError::Forbidden(_))
        ));
        assert!(matches!(
            svc.delete(c.id, stranger).await,
            Err(DomainError::Forbidden(_))
        ));

        svc.delete(c.id, owner).await.unwrap();
        assert!(matches!(
            svc.can_access(c.id, owner).await,
            Err(DomainError::NotFound { entity: "Collection", .. })
        ));
    }

    #[tokio::test]
    async fn list_for_user_only_shows_memberships() {
        let svc = service();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        svc.create(u1, "mine").await.unwrap();
        let shared = svc.create(u2, "shared").await.unwrap();
        svc.add_user(shared.id, u2, u1).await.unwrap();

        let names: Vec<String> = svc
            .list_for_user(u1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"mine".to_string()));
        assert!(names.contains(&"shared".to_string()));

        assert_eq!(svc.list_for_user(u2).await.unwrap().len(), 1);
    }
}
