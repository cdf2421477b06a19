//! Pinpoint record — a media post attached to a pin

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A photo post attached to a pin. The media field is a URL the frontend
/// renders later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pinpoint {
    pub id: Uuid,
    pub pin: Uuid,
    pub media: String,
    pub caption: Option<String>,
    pub user: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pinpoint {
    pub fn new(pin: Uuid, media: String, caption: Option<String>, user: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            pin,
            media,
            caption,
            user,
            created_at: now,
            updated_at: now,
        }
    }

    /// Anonymous posts are editable by anyone, owned posts only by their
    /// author — same gating as pin removal.
    pub fn editable_by(&self, user: Option<Uuid>) -> bool {
        match self.user {
            None => true,
            Some(author) => user == Some(author),
        }
    }
}

/// Soft outcome for owner-gated pinpoint mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostUpdate {
    Applied,
    Denied,
}

impl PostUpdate {
    pub fn applied(&self) -> bool {
        matches!(self, PostUpdate::Applied)
    }
}
