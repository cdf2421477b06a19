//! Map aggregate service — drives the selection state machine
//!
//! Every mutation here is a read-modify-write against the document store
//! without a cross-record transaction. Two racing mutations on one map can
//! lose an append (both read, both write, last write wins) — accepted
//! best-effort consistency, single-record atomicity comes from the store.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Map, MapEvent, RepositoryProvider, Selection};

/// A mutation report: what happened, plus the authoritative post-state
/// re-read from the store (not an echo of the request).
#[derive(Debug)]
pub struct MapMutation {
    pub event: MapEvent,
    pub map: Map,
}

/// Service for map aggregates.
pub struct MapService {
    repos: Arc<dyn RepositoryProvider>,
}

impl MapService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a map, empty or seeded with existing location/pin references.
    pub async fn create(
        &self,
        locations: Vec<Uuid>,
        pins: Vec<Uuid>,
        curr_location: Option<Uuid>,
    ) -> DomainResult<Map> {
        let map = Map::new(locations, pins, curr_location);
        self.repos.maps().create(map.clone()).await?;
        info!("Map created: {}", map.id);
        Ok(map)
    }

    /// Pass-through delete; absent ids are a no-op success.
    pub async fn sanitize(&self, id: Uuid) -> DomainResult<()> {
        self.repos.maps().delete(id).await
    }

    pub async fn get_map(&self, id: Uuid) -> DomainResult<Map> {
        self.require(id).await
    }

    pub async fn get_pins(&self, id: Uuid) -> DomainResult<Vec<Uuid>> {
        Ok(self.require(id).await?.pins)
    }

    pub async fn get_locations(&self, id: Uuid) -> DomainResult<Vec<Uuid>> {
        Ok(self.require(id).await?.locations)
    }

    pub async fn get_selection(&self, id: Uuid) -> DomainResult<Selection> {
        Ok(self.require(id).await?.selection())
    }

    /// Idle → Selected; when something is already selected, this toggles
    /// the selection off instead of overwriting it.
    pub async fn select_location(&self, id: Uuid, location: Uuid) -> DomainResult<MapMutation> {
        self.mutate(id, |map| map.select(location)).await
    }

    /// Selected → Idle; from Idle a reported no-op.
    pub async fn deselect_location(&self, id: Uuid) -> DomainResult<MapMutation> {
        self.mutate(id, |map| map.deselect()).await
    }

    /// Append a pin reference and close the selection prompt. A pin already
    /// on the map is a reported no-op that touches nothing.
    pub async fn add_pin(&self, id: Uuid, pin: Uuid) -> DomainResult<MapMutation> {
        self.mutate(id, |map| map.add_pin(pin)).await
    }

    /// Unlink a pin reference; the selection is untouched. The pin record
    /// itself is the pin registry's business, not ours.
    pub async fn remove_pin(&self, id: Uuid, pin: Uuid) -> DomainResult<MapMutation> {
        self.mutate(id, |map| map.remove_pin(pin)).await
    }

    /// Read, apply, write (skipped for no-ops), then re-read: the returned
    /// map is the post-mutation snapshot the caller must trust.
    async fn mutate<F>(&self, id: Uuid, apply: F) -> DomainResult<MapMutation>
    where
        F: FnOnce(&mut Map) -> MapEvent,
    {
        let mut map = self.require(id).await?;
        let event = apply(&mut map);
        if event.mutated() {
            self.repos.maps().update(map).await?;
            info!("Map {}: {:?}", id, event);
        }
        let map = self.require(id).await?;
        Ok(MapMutation { event, map })
    }

    async fn require(&self, id: Uuid) -> DomainResult<Map> {
        self.repos
            .maps()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("Map", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{LocationService, PinService};
    use crate::infrastructure::InMemoryProvider;

    fn repos() -> Arc<InMemoryProvider> {
        Arc::new(InMemoryProvider::new())
    }

    #[tokio::test]
    async fn select_then_select_returns_to_idle() {
        let svc = MapService::new(repos());
        let map = svc.create(vec![], vec![], None).await.unwrap();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let first = svc.select_location(map.id, a).await.unwrap();
        assert_eq!(first.event, MapEvent::Selected);
        assert_eq!(first.map.curr_location, Some(a));

        let second = svc.select_location(map.id, b).await.unwrap();
        assert_eq!(second.event, MapEvent::Deselected);
        assert_eq!(second.map.curr_location, None);
    }

    #[tokio::test]
    async fn deselect_when_idle_reports_nothing_selected() {
        let svc = MapService::new(repos());
        let map = svc.create(vec![], vec![], None).await.unwrap();
        let mutation = svc.deselect_location(map.id).await.unwrap();
        assert_eq!(mutation.event, MapEvent::NothingSelected);
    }

    #[tokio::test]
    async fn add_pin_is_idempotent_and_forces_idle() {
        let svc = MapService::new(repos());
        let location = Uuid::new_v4();
        let map = svc.create(vec![], vec![], Some(location)).await.unwrap();
        let pin = Uuid::new_v4();

        let added = svc.add_pin(map.id, pin).await.unwrap();
        assert_eq!(added.event, MapEvent::PinAdded);
        assert_eq!(added.map.curr_location, None);
        assert_eq!(added.map.pins, vec![pin]);

        svc.select_location(map.id, location).await.unwrap();
        let repeat = svc.add_pin(map.id, pin).await.unwrap();
        assert_eq!(repeat.event, MapEvent::PinAlreadyPresent);
        assert_eq!(repeat.map.pins, vec![pin]);
        // the duplicate add is a pure no-op: prompt stays open
        assert_eq!(repeat.map.curr_location, Some(location));
    }

    #[tokio::test]
    async fn remove_pin_does_not_touch_selection() {
        let svc = MapService::new(repos());
        let pin = Uuid::new_v4();
        let location = Uuid::new_v4();
        let map = svc.create(vec![], vec![pin], Some(location)).await.unwrap();

        let removed = svc.remove_pin(map.id, pin).await.unwrap();
        assert_eq!(removed.event, MapEvent::PinRemoved);
        assert!(removed.map.pins.is_empty());
        assert_eq!(removed.map.curr_location, Some(location));

        let missing = svc.remove_pin(map.id, pin).await.unwrap();
        assert_eq!(missing.event, MapEvent::PinNotPresent);
    }

    #[tokio::test]
    async fn operations_on_unknown_map_fail_hard() {
        let svc = MapService::new(repos());
        let id = Uuid::new_v4();
        assert!(matches!(
            svc.get_pins(id).await,
            Err(DomainError::NotFound { entity: "Map", .. })
        ));
        assert!(matches!(
            svc.select_location(id, Uuid::new_v4()).await,
            Err(DomainError::NotFound { entity: "Map", .. })
        ));
    }

    // The click → drop flow from the route layer: materialize a location,
    // select it, drop a pin there, commit the drop onto the map.
    #[tokio::test]
    async fn select_coordinates_then_drop_pin_scenario() {
        let repos = repos();
        let maps = MapService::new(repos.clone());
        let locations = LocationService::new(repos.clone());
        let pins = PinService::new(repos.clone());
        let user = Uuid::new_v4();

        let map = maps.create(vec![], vec![], None).await.unwrap();

        // client clicks (3, 4)
        let (location, created) = locations.get_or_create(3.0, 4.0, None).await.unwrap();
        assert!(created);
        let selected = maps.select_location(map.id, location.id).await.unwrap();
        assert_eq!(selected.map.curr_location, Some(location.id));

        // client commits the drop
        let Selection::Selected(curr) = maps.get_selection(map.id).await.unwrap() else {
            panic!("expected a selection");
        };
        let (pin, _) = pins.drop_pin(Some(user), Some(curr)).await.unwrap();
        let committed = maps.add_pin(map.id, pin.id).await.unwrap();

        assert_eq!(committed.map.pins, vec![pin.id]);
        assert_eq!(committed.map.curr_location, None);
        assert_eq!(pin.location, Some(location.id));
    }
}
