//! Location record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point on the shared map plane.
///
/// At most one record exists per exact `(x, y)` pair; the location service
/// deduplicates on creation and never rewrites the name of an existing
/// record. The name is optional — most locations are anonymous coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn new(x: f64, y: f64, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Exact coordinate equality, the same contract as the store's
    /// field-equality filter.
    pub fn is_at(&self, x: f64, y: f64) -> bool {
        self.x == x && self.y == y
    }
}
