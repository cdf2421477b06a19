//! Pinpoint service — media posts attached to pins

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Pinpoint, PostUpdate, RepositoryProvider};

/// Service for pinpoint posts.
///
/// Deleting or recaptioning a post someone else owns is refused softly;
/// a missing post is a hard `NotFound` (unlike pin removal, which reports
/// the miss — the asymmetry is inherited behavior).
pub struct PinpointService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PinpointService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn make_post(
        &self,
        pin: Uuid,
        media: &str,
        caption: Option<String>,
        user: Option<Uuid>,
    ) -> DomainResult<Pinpoint> {
        if media.is_empty() {
            return Err(DomainError::Validation(
                "Pinpoint media must be non-empty".into(),
            ));
        }
        let pinpoint = Pinpoint::new(pin, media.to_string(), caption, user);
        self.repos.pinpoints().create(pinpoint.clone()).await?;
        info!("Pinpoint {} posted on pin {}", pinpoint.id, pin);
        Ok(pinpoint)
    }

    pub async fn delete_post(&self, id: Uuid, user: Option<Uuid>) -> DomainResult<PostUpdate> {
        let pinpoint = self.require(id).await?;
        if !pinpoint.editable_by(user) {
            debug!("Pinpoint {} delete denied for {:?}", id, user);
            return Ok(PostUpdate::Denied);
        }
        self.repos.pinpoints().delete(id).await?;
        Ok(PostUpdate::Applied)
    }

    pub async fn edit_caption(
        &self,
        id: Uuid,
        caption: String,
        user: Option<Uuid>,
    ) -> DomainResult<PostUpdate> {
        let mut pinpoint = self.require(id).await?;
        if !pinpoint.editable_by(user) {
            debug!("Pinpoint {} caption edit denied for {:?}", id, user);
            return Ok(PostUpdate::Denied);
        }
        pinpoint.caption = Some(caption);
        self.repos.pinpoints().update(pinpoint).await?;
        Ok(PostUpdate::Applied)
    }

    pub async fn find_by_pin(&self, pin: Uuid) -> DomainResult<Vec<Pinpoint>> {
        self.repos.pinpoints().find_by_pin(pin).await
    }

    pub async fn find_by_user(&self, user: Uuid) -> DomainResult<Vec<Pinpoint>> {
        self.repos.pinpoints().find_by_user(user).await
    }

    async fn require(&self, id: Uuid) -> DomainResult<Pinpoint> {
        self.repos
            .pinpoints()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::missing("Pinpoint", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryProvider;

    fn service() -> PinpointService {
        PinpointService::new(Arc::new(InMemoryProvider::new()))
    }

    #[tokio::test]
    async fn empty_media_is_rejected() {
        let svc = service();
        assert!(matches!(
            svc.make_post(Uuid::new_v4(), "", None, None).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn foreign_author_cannot_delete_or_recaption() {
        let svc = service();
        let author = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let pp = svc
            .make_post(Uuid::new_v4(), "https://img/1.jpg", None, Some(author))
            .await
            .unwrap();

        let denied = svc.delete_post(pp.id, Some(stranger)).await.unwrap();
        assert_eq!(denied, PostUpdate::Denied);
        let denied = svc
            .edit_caption(pp.id, "mine now".into(), Some(stranger))
            .await
            .unwrap();
        assert_eq!(denied, PostUpdate::Denied);

        let applied = svc
            .edit_caption(pp.id, "sunset".into(), Some(author))
            .await
            .unwrap();
        assert_eq!(applied, PostUpdate::Applied);
        let applied = svc.delete_post(pp.id, Some(author)).await.unwrap();
        assert_eq!(applied, PostUpdate::Applied);
    }

    #[tokio::test]
    async fn missing_post_fails_hard() {
        let svc = service();
        assert!(matches!(
            svc.delete_post(Uuid::new_v4(), None).await,
            Err(DomainError::NotFound { entity: "Pinpoint", .. })
        ));
    }

    #[tokio::test]
    async fn posts_are_listed_per_pin_and_per_user() {
        let svc = service();
        let pin = Uuid::new_v4();
        let user = Uuid::new_v4();
        svc.make_post(pin, "https://img/a.jpg", None, Some(user))
            .await
            .unwrap();
        svc.make_post(pin, "https://img/b.jpg", None, None).await.unwrap();
        svc.make_post(Uuid::new_v4(), "https://img/c.jpg", None, Some(user))
            .await
            .unwrap();

        assert_eq!(svc.find_by_pin(pin).await.unwrap().len(), 2);
        assert_eq!(svc.find_by_user(user).await.unwrap().len(), 2);
    }
}
