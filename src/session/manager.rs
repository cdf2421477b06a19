//! Session registry - maps bearer tokens to user ids

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

/// Active sessions, keyed by opaque bearer token.
///
/// The token carries no claims; everything the request layer needs is the
/// acting user's id, resolved here. Tokens live until logout or process
/// restart.
pub struct SessionManager {
    sessions: DashMap<Uuid, Uuid>,
}

/// Shared session manager reference
pub type SharedSessionManager = Arc<SessionManager>;

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn shared() -> SharedSessionManager {
        Arc::new(Self::new())
    }

    /// Start a session for a user and hand back the bearer token.
    pub fn start(&self, user: Uuid) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.insert(token, user);
        info!("Session started for user {}", user);
        token
    }

    /// End a session. Unknown tokens are ignored.
    pub fn end(&self, token: Uuid) {
        if let Some((_, user)) = self.sessions.remove(&token) {
            info!("Session ended for user {}", user);
        }
    }

    /// The acting user behind a token, if the session is live.
    pub fn resolve(&self, token: Uuid) -> Option<Uuid> {
        self.sessions.get(&token).map(|entry| *entry.value())
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_resolve_end_roundtrip() {
        let manager = SessionManager::new();
        let user = Uuid::new_v4();

        let token = manager.start(user);
        assert_eq!(manager.resolve(token), Some(user));
        assert_eq!(manager.active_count(), 1);

        manager.end(token);
        assert_eq!(manager.resolve(token), None);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        let manager = SessionManager::new();
        assert_eq!(manager.resolve(Uuid::new_v4()), None);
        manager.end(Uuid::new_v4()); // no-op
    }
}
