//! In-memory document store
//!
//! DashMap-backed provider implementing every repository trait. Atomicity
//! holds at single-record granularity only: read-modify-write sequences in
//! the services above are not transactional, matching the consistency model
//! the services document.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use async_trait::async_trait;

use crate::domain::{
    Collection, CollectionRepository, DomainResult, Location, LocationRepository, Map,
    MapRepository, Pin, PinRepository, Pinpoint, PinpointRepository, RepositoryProvider, User,
    UserRepository,
};

/// In-memory storage for development and testing
pub struct InMemoryProvider {
    locations: DashMap<Uuid, Location>,
    pins: DashMap<Uuid, Pin>,
    maps: DashMap<Uuid, Map>,
    collections: DashMap<Uuid, Collection>,
    pinpoints: DashMap<Uuid, Pinpoint>,
    users: DashMap<Uuid, User>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self {
            locations: DashMap::new(),
            pins: DashMap::new(),
            maps: DashMap::new(),
            collections: DashMap::new(),
            pinpoints: DashMap::new(),
            users: DashMap::new(),
        }
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryProvider {
    fn locations(&self) -> &dyn LocationRepository {
        self
    }

    fn pins(&self) -> &dyn PinRepository {
        self
    }

    fn maps(&self) -> &dyn MapRepository {
        self
    }

    fn collections(&self) -> &dyn CollectionRepository {
        self
    }

    fn pinpoints(&self) -> &dyn PinpointRepository {
        self
    }

    fn users(&self) -> &dyn UserRepository {
        self
    }
}

#[async_trait]
impl LocationRepository for InMemoryProvider {
    async fn create(&self, location: Location) -> DomainResult<()> {
        self.locations.insert(location.id, location);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Location>> {
        Ok(self.locations.get(&id).map(|l| l.clone()))
    }

    async fn find_by_coordinates(&self, x: f64, y: f64) -> DomainResult<Option<Location>> {
        Ok(self
            .locations
            .iter()
            .find(|l| l.is_at(x, y))
            .map(|l| l.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Location>> {
        Ok(self
            .locations
            .iter()
            .filter(|l| l.name.as_deref() == Some(name))
            .map(|l| l.clone())
            .collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.locations.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PinRepository for InMemoryProvider {
    async fn create(&self, pin: Pin) -> DomainResult<()> {
        self.pins.insert(pin.id, pin);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Pin>> {
        Ok(self.pins.get(&id).map(|p| p.clone()))
    }

    async fn find_by_location(&self, location: Uuid) -> DomainResult<Option<Pin>> {
        Ok(self
            .pins
            .iter()
            .find(|p| p.location == Some(location))
            .map(|p| p.clone()))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.pins.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl MapRepository for InMemoryProvider {
    async fn create(&self, map: Map) -> DomainResult<()> {
        self.maps.insert(map.id, map);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Map>> {
        Ok(self.maps.get(&id).map(|m| m.clone()))
    }

    async fn update(&self, mut map: Map) -> DomainResult<()> {
        map.updated_at = Utc::now();
        self.maps.insert(map.id, map);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.maps.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CollectionRepository for InMemoryProvider {
    async fn create(&self, collection: Collection) -> DomainResult<()> {
        self.collections.insert(collection.id, collection);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Collection>> {
        Ok(self.collections.get(&id).map(|c| c.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Collection>> {
        Ok(self
            .collections
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.clone()))
    }

    async fn find_for_user(&self, user: Uuid) -> DomainResult<Vec<Collection>> {
        let mut matching: Vec<Collection> = self
            .collections
            .iter()
            .filter(|c| c.is_member(user))
            .map(|c| c.clone())
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(matching)
    }

    async fn update(&self, mut collection: Collection) -> DomainResult<()> {
        collection.updated_at = Utc::now();
        self.collections.insert(collection.id, collection);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.collections.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PinpointRepository for InMemoryProvider {
    async fn create(&self, pinpoint: Pinpoint) -> DomainResult<()> {
        self.pinpoints.insert(pinpoint.id, pinpoint);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Pinpoint>> {
        Ok(self.pinpoints.get(&id).map(|p| p.clone()))
    }

    async fn find_by_pin(&self, pin: Uuid) -> DomainResult<Vec<Pinpoint>> {
        let mut matching: Vec<Pinpoint> = self
            .pinpoints
            .iter()
            .filter(|p| p.pin == pin)
            .map(|p| p.clone())
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(matching)
    }

    async fn find_by_user(&self, user: Uuid) -> DomainResult<Vec<Pinpoint>> {
        let mut matching: Vec<Pinpoint> = self
            .pinpoints
            .iter()
            .filter(|p| p.user == Some(user))
            .map(|p| p.clone())
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(matching)
    }

    async fn update(&self, mut pinpoint: Pinpoint) -> DomainResult<()> {
        pinpoint.updated_at = Utc::now();
        self.pinpoints.insert(pinpoint.id, pinpoint);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.pinpoints.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryProvider {
    async fn create(&self, user: User) -> DomainResult<()> {
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.iter().map(|u| u.clone()).collect())
    }

    async fn update(&self, mut user: User) -> DomainResult<()> {
        user.updated_at = Utc::now();
        self.users.insert(user.id, user);
        Ok(())
    }
}
