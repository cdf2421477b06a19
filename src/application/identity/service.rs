//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here. HTTP handlers should be
//! thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, RepositoryProvider, User};
use crate::session::SharedSessionManager;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: Uuid,
    pub user: User,
}

/// User service — registration, login, profile updates.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    sessions: SharedSessionManager,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        sessions: SharedSessionManager,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            repos,
            sessions,
            bcrypt_cost,
        }
    }

    // ── Registration & authentication ───────────────────────────

    pub async fn register(&self, username: &str, password: &str) -> DomainResult<User> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Username and password must be non-empty".into(),
            ));
        }
        if self.repos.users().find_by_username(username).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "User {} already exists",
                username
            )));
        }

        let hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;
        let user = User::new(username.to_string(), hash);
        self.repos.users().create(user.clone()).await?;
        info!("User registered: {}", username);
        Ok(user)
    }

    /// Authenticate and open a session. Credential failures are deliberately
    /// indistinguishable (unknown user vs wrong password).
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(user) = self.repos.users().find_by_username(username).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        let valid = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let token = self.sessions.start(user.id);
        Ok(AuthResult { token, user })
    }

    pub fn logout(&self, token: Uuid) {
        self.sessions.end(token);
    }

    // ── Queries & updates ───────────────────────────────────────

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("User", id))
    }

    pub async fn get_by_username(&self, username: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_username(username)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "username",
                value: username.to_string(),
            })
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.repos.users().find_all().await
    }

    /// Rename an account; the new username must be free.
    pub async fn update_username(&self, id: Uuid, username: &str) -> DomainResult<User> {
        if username.is_empty() {
            return Err(DomainError::Validation("Username must be non-empty".into()));
        }
        if let Some(taken) = self.repos.users().find_by_username(username).await? {
            if taken.id != id {
                return Err(DomainError::Conflict(format!(
                    "User {} already exists",
                    username
                )));
            }
        }

        let mut user = self.get_by_id(id).await?;
        user.username = username.to_string();
        self.repos.users().update(user).await?;
        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryProvider;
    use crate::session::SessionManager;

    fn service() -> UserService {
        // min cost keeps the hash fast in tests
        UserService::new(
            Arc::new(InMemoryProvider::new()),
            SessionManager::shared(),
            bcrypt::DEFAULT_COST.min(4),
        )
    }

    #[tokio::test]
    async fn register_login_logout_roundtrip() {
        let svc = service();
        let user = svc.register("ada", "hunter2").await.unwrap();

        let auth = svc.login("ada", "hunter2").await.unwrap();
        assert_eq!(auth.user.id, user.id);

        svc.logout(auth.token);
        assert!(matches!(
            svc.login("ada", "wrong").await,
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let svc = service();
        svc.register("ada", "pw").await.unwrap();
        assert!(matches!(
            svc.register("ada", "pw2").await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn unknown_user_login_is_unauthorized() {
        let svc = service();
        assert!(matches!(
            svc.login("ghost", "pw").await,
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn rename_respects_uniqueness() {
        let svc = service();
        let ada = svc.register("ada", "pw").await.unwrap();
        svc.register("grace", "pw").await.unwrap();

        assert!(matches!(
            svc.update_username(ada.id, "grace").await,
            Err(DomainError::Conflict(_))
        ));
        let renamed = svc.update_username(ada.id, "ada2").await.unwrap();
        assert_eq!(renamed.username, "ada2");
    }
}
