//! Pin record and removal outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-of-interest marker, optionally bound to one location and one
/// owning user.
///
/// At most one pin exists per location. A pin with no owner is removable
/// by anyone; an owned pin only by its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    pub id: Uuid,
    pub user: Option<Uuid>,
    pub location: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pin {
    pub fn new(user: Option<Uuid>, location: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user,
            location,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn removable_by(&self, user: Option<Uuid>) -> bool {
        match self.user {
            None => true,
            Some(owner) => user == Some(owner),
        }
    }
}

/// Result of a pin removal attempt.
///
/// Ownership mismatches and lookup misses are reported to the caller, not
/// raised — the soft channel, distinct from `DomainError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeOutcome {
    Deleted,
    Denied,
    Missing,
}

impl SanitizeOutcome {
    pub fn deleted(&self) -> bool {
        matches!(self, SanitizeOutcome::Deleted)
    }

    pub fn message(&self) -> &'static str {
        match self {
            SanitizeOutcome::Deleted => "Pin deleted successfully",
            SanitizeOutcome::Denied => "User does not have access to pin",
            SanitizeOutcome::Missing => "No such pin exists",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unowned_pin_is_removable_by_anyone() {
        let pin = Pin::new(None, None);
        assert!(pin.removable_by(None));
        assert!(pin.removable_by(Some(Uuid::new_v4())));
    }

    #[test]
    fn owned_pin_is_removable_only_by_owner() {
        let owner = Uuid::new_v4();
        let pin = Pin::new(Some(owner), None);
        assert!(pin.removable_by(Some(owner)));
        assert!(!pin.removable_by(Some(Uuid::new_v4())));
        assert!(!pin.removable_by(None));
    }
}
