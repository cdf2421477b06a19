//! Map record and the selection state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A map tracking which locations and pins are in play, plus at most one
/// "currently selected" location awaiting a pending action.
///
/// Locations and pins are referenced by id only — the map owns neither, and
/// deleting a referenced record elsewhere leaves a dangling id here. Read
/// paths must treat an unresolved reference as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    pub id: Uuid,
    pub locations: Vec<Uuid>,
    pub pins: Vec<Uuid>,
    pub curr_location: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The two states of a map's pending-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Selected(Uuid),
}

/// What a mutating map operation actually did.
///
/// No-ops are legal results, reported to the caller instead of raised
/// (the soft channel; hard failures stay on `DomainError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    Selected,
    Deselected,
    NothingSelected,
    PinAdded,
    PinAlreadyPresent,
    PinRemoved,
    PinNotPresent,
}

impl MapEvent {
    /// Whether the event changed the record (no-ops skip the store write).
    pub fn mutated(&self) -> bool {
        !matches!(
            self,
            MapEvent::NothingSelected | MapEvent::PinAlreadyPresent | MapEvent::PinNotPresent
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            MapEvent::Selected => "Location selected successfully",
            MapEvent::Deselected => "Location deselected successfully",
            MapEvent::NothingSelected => "Map has no location selected",
            MapEvent::PinAdded => "Pin successfully added",
            MapEvent::PinAlreadyPresent => "Pin already exists on map",
            MapEvent::PinRemoved => "Pin successfully removed",
            MapEvent::PinNotPresent => "Map does not contain pin",
        }
    }
}

impl Map {
    pub fn new(locations: Vec<Uuid>, pins: Vec<Uuid>, curr_location: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            locations,
            pins,
            curr_location,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn selection(&self) -> Selection {
        match self.curr_location {
            Some(location) => Selection::Selected(location),
            None => Selection::Idle,
        }
    }

    /// Idle → Selected. Selecting while something is already selected
    /// clears the selection instead of overwriting it (click-to-toggle).
    pub fn select(&mut self, location: Uuid) -> MapEvent {
        match self.curr_location {
            None => {
                self.curr_location = Some(location);
                MapEvent::Selected
            }
            Some(_) => self.deselect(),
        }
    }

    /// Selected → Idle. From Idle this is a reported no-op.
    pub fn deselect(&mut self) -> MapEvent {
        if self.curr_location.take().is_some() {
            MapEvent::Deselected
        } else {
            MapEvent::NothingSelected
        }
    }

    /// Appends a pin and closes the selection prompt. A pin already on the
    /// map is a no-op that leaves the selection untouched; the pin set never
    /// holds duplicates.
    pub fn add_pin(&mut self, pin: Uuid) -> MapEvent {
        if self.pins.contains(&pin) {
            return MapEvent::PinAlreadyPresent;
        }
        self.pins.push(pin);
        self.curr_location = None;
        MapEvent::PinAdded
    }

    /// Removes the single matching pin reference. Selection is untouched
    /// either way.
    pub fn remove_pin(&mut self, pin: Uuid) -> MapEvent {
        match self.pins.iter().position(|p| *p == pin) {
            Some(index) => {
                self.pins.remove(index);
                MapEvent::PinRemoved
            }
            None => MapEvent::PinNotPresent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_from_idle_selects() {
        let mut map = Map::new(vec![], vec![], None);
        let location = Uuid::new_v4();
        assert_eq!(map.select(location), MapEvent::Selected);
        assert_eq!(map.selection(), Selection::Selected(location));
    }

    #[test]
    fn select_while_selected_deselects_instead_of_overwriting() {
        let mut map = Map::new(vec![], vec![], None);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        map.select(a);
        assert_eq!(map.select(b), MapEvent::Deselected);
        assert_eq!(map.selection(), Selection::Idle);
        assert_eq!(map.curr_location, None);
    }

    #[test]
    fn deselect_from_idle_is_reported_noop() {
        let mut map = Map::new(vec![], vec![], None);
        assert_eq!(map.deselect(), MapEvent::NothingSelected);
        assert_eq!(map.selection(), Selection::Idle);
    }

    #[test]
    fn add_pin_clears_selection() {
        let mut map = Map::new(vec![], vec![], Some(Uuid::new_v4()));
        let pin = Uuid::new_v4();
        assert_eq!(map.add_pin(pin), MapEvent::PinAdded);
        assert_eq!(map.selection(), Selection::Idle);
        assert_eq!(map.pins, vec![pin]);
    }

    #[test]
    fn add_pin_twice_keeps_one_reference_and_selection() {
        let selected = Uuid::new_v4();
        let mut map = Map::new(vec![], vec![], None);
        let pin = Uuid::new_v4();
        map.add_pin(pin);
        map.select(selected);
        assert_eq!(map.add_pin(pin), MapEvent::PinAlreadyPresent);
        assert_eq!(map.pins, vec![pin]);
        // duplicate append is a pure no-op, so the prompt stays open
        assert_eq!(map.selection(), Selection::Selected(selected));
    }

    #[test]
    fn remove_pin_leaves_selection_alone() {
        let selected = Uuid::new_v4();
        let pin = Uuid::new_v4();
        let mut map = Map::new(vec![], vec![pin], Some(selected));
        assert_eq!(map.remove_pin(pin), MapEvent::PinRemoved);
        assert!(map.pins.is_empty());
        assert_eq!(map.selection(), Selection::Selected(selected));
    }

    #[test]
    fn remove_absent_pin_is_reported_noop() {
        let pin = Uuid::new_v4();
        let mut map = Map::new(vec![], vec![pin], None);
        assert_eq!(map.remove_pin(Uuid::new_v4()), MapEvent::PinNotPresent);
        assert_eq!(map.pins, vec![pin]);
    }

    #[test]
    fn noop_events_do_not_count_as_mutations() {
        assert!(!MapEvent::NothingSelected.mutated());
        assert!(!MapEvent::PinAlreadyPresent.mutated());
        assert!(!MapEvent::PinNotPresent.mutated());
        assert!(MapEvent::Selected.mutated());
        assert!(MapEvent::PinAdded.mutated());
    }
}
