//! Collection record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, multi-user shared bag of pins.
///
/// Names are globally unique. The creator is always a member, and only
/// current members may read or mutate the collection. Membership and the
/// pin bag behave as sets — repeated adds do not accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub users: Vec<Uuid>,
    pub pins: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(name: String, creator: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            users: vec![creator],
            pins: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_member(&self, user: Uuid) -> bool {
        self.users.contains(&user)
    }

    /// Returns `false` when the user was already a member.
    pub fn add_member(&mut self, user: Uuid) -> bool {
        if self.is_member(user) {
            return false;
        }
        self.users.push(user);
        true
    }

    /// Returns `false` when the pin was already in the bag.
    pub fn add_pin(&mut self, pin: Uuid) -> bool {
        if self.pins.contains(&pin) {
            return false;
        }
        self.pins.push(pin);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_is_a_member() {
        let creator = Uuid::new_v4();
        let collection = Collection::new("trip".into(), creator);
        assert!(collection.is_member(creator));
        assert_eq!(collection.users, vec![creator]);
    }

    #[test]
    fn membership_does_not_accumulate_duplicates() {
        let creator = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut collection = Collection::new("trip".into(), creator);
        assert!(collection.add_member(other));
        assert!(!collection.add_member(other));
        assert_eq!(collection.users, vec![creator, other]);
    }

    #[test]
    fn pin_bag_is_a_set() {
        let mut collection = Collection::new("trip".into(), Uuid::new_v4());
        let pin = Uuid::new_v4();
        assert!(collection.add_pin(pin));
        assert!(!collection.add_pin(pin));
        assert_eq!(collection.pins, vec![pin]);
    }
}
