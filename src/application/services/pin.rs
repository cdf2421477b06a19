//! Pin registry — placement dedup and owner-gated removal

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Pin, RepositoryProvider, SanitizeOutcome};

/// Service for the pin registry.
///
/// Guards the at-most-one-pin-per-location invariant on placement and the
/// owner gate on removal. Removal refusals are reported, not raised.
pub struct PinService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PinService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Drop a pin. If one already references `location`, that pin is
    /// returned instead of creating a duplicate (double-drop guard). Pins
    /// without a location skip the dedup — unbound pins may accumulate.
    ///
    /// Best-effort under races: two simultaneous drops at an unclaimed
    /// location can both observe the miss and both create.
    pub async fn drop_pin(
        &self,
        user: Option<Uuid>,
        location: Option<Uuid>,
    ) -> DomainResult<(Pin, bool)> {
        if let Some(location) = location {
            if let Some(existing) = self.repos.pins().find_by_location(location).await? {
                return Ok((existing, false));
            }
        }

        let pin = Pin::new(user, location);
        self.repos.pins().create(pin.clone()).await?;
        info!("Pin {} dropped at location {:?}", pin.id, location);
        Ok((pin, true))
    }

    /// Owner-gated delete. Unowned pins are removable by anyone; an owned
    /// pin by its owner only. Both the lookup miss and the ownership
    /// mismatch come back as outcomes, never as errors.
    pub async fn sanitize(
        &self,
        id: Uuid,
        acting_user: Option<Uuid>,
    ) -> DomainResult<SanitizeOutcome> {
        let Some(pin) = self.repos.pins().find_by_id(id).await? else {
            return Ok(SanitizeOutcome::Missing);
        };

        if !pin.removable_by(acting_user) {
            debug!("Pin {} removal denied for user {:?}", id, acting_user);
            return Ok(SanitizeOutcome::Denied);
        }

        self.repos.pins().delete(id).await?;
        info!("Pin {} deleted", id);
        Ok(SanitizeOutcome::Deleted)
    }

    /// The pin's bound location. `NotFound` when the pin is absent, a
    /// distinct `MissingAttribute` when it exists without a location.
    pub async fn get_location(&self, id: Uuid) -> DomainResult<Uuid> {
        let pin = self.get_by_id(id).await?;
        pin.location.ok_or(DomainError::MissingAttribute {
            entity: "Pin",
            id,
            attribute: "location",
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Pin> {
        self.repos
            .pins()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("Pin", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryProvider;

    fn service() -> PinService {
        PinService::new(Arc::new(InMemoryProvider::new()))
    }

    #[tokio::test]
    async fn double_drop_returns_same_pin() {
        let svc = service();
        let location = Uuid::new_v4();
        let (first, created) = svc.drop_pin(None, Some(location)).await.unwrap();
        assert!(created);
        let (second, created) = svc.drop_pin(Some(Uuid::new_v4()), Some(location)).await.unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn unbound_pins_are_not_deduplicated() {
        let svc = service();
        let (first, _) = svc.drop_pin(None, None).await.unwrap();
        let (second, _) = svc.drop_pin(None, None).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn anyone_can_sanitize_an_unowned_pin() {
        let svc = service();
        let (pin, _) = svc.drop_pin(None, Some(Uuid::new_v4())).await.unwrap();
        let outcome = svc.sanitize(pin.id, Some(Uuid::new_v4())).await.unwrap();
        assert_eq!(outcome, SanitizeOutcome::Deleted);
        assert!(matches!(
            svc.get_by_id(pin.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn foreign_owner_is_denied_and_pin_survives() {
        let svc = service();
        let owner = Uuid::new_v4();
        let (pin, _) = svc.drop_pin(Some(owner), Some(Uuid::new_v4())).await.unwrap();

        let outcome = svc.sanitize(pin.id, Some(Uuid::new_v4())).await.unwrap();
        assert_eq!(outcome, SanitizeOutcome::Denied);
        assert!(svc.get_by_id(pin.id).await.is_ok());

        let outcome = svc.sanitize(pin.id, Some(owner)).await.unwrap();
        assert_eq!(outcome, SanitizeOutcome::Deleted);
    }

    #[tokio::test]
    async fn sanitizing_a_missing_pin_reports_softly() {
        let svc = service();
        let outcome = svc.sanitize(Uuid::new_v4(), None).await.unwrap();
        assert_eq!(outcome, SanitizeOutcome::Missing);
    }

    #[tokio::test]
    async fn get_location_distinguishes_absent_pin_from_unbound_pin() {
        let svc = service();
        let location = Uuid::new_v4();
        let (bound, _) = svc.drop_pin(None, Some(location)).await.unwrap();
        assert_eq!(svc.get_location(bound.id).await.unwrap(), location);

        let (unbound, _) = svc.drop_pin(None, None).await.unwrap();
        assert!(matches!(
            svc.get_location(unbound.id).await,
            Err(DomainError::MissingAttribute { entity: "Pin", .. })
        ));
        assert!(matches!(
            svc.get_location(Uuid::new_v4()).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
