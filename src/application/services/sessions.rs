// src/application/services/sessions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, FlashMessage},
        error::ApplicationResult,
        ports::sessions::{SessionData, SessionId, SessionStore},
    },
    domain::user::UserRepository,
};

/// Session state attached to one request.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub id: SessionId,
    pub user: Option<AuthenticatedUser>,
    /// The id was minted for this request and the client does not know it yet.
    pub is_new: bool,
}

/// Session lifecycle on top of a [`SessionStore`]: binding users, rotating
/// ids on privilege change and the one-shot flash queue.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    user_repo: Arc<dyn UserRepository>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { store, user_repo }
    }

    /// Unknown ids and ids pointing at missing or disabled users all resolve
    /// to an anonymous session; only unknown ids get a fresh id.
    pub async fn resolve(&self, presented: Option<SessionId>) -> ApplicationResult<ResolvedSession> {
        let Some(id) = presented else {
            return Ok(Self::fresh());
        };
        let Some(data) = self.store.load(id).await? else {
            return Ok(Self::fresh());
        };

        let user = match data.user_id {
            Some(user_id) => self
                .user_repo
                .find_by_id(user_id)
                .await?
                .filter(|user| user.is_active)
                .map(|user| AuthenticatedUser::from(&user)),
            None => None,
        };

        Ok(ResolvedSession {
            id,
            user,
            is_new: false,
        })
    }

    /// Binds `user` to a new session id, carrying pending flashes over.
    /// The old id stops being valid.
    pub async fn login(
        &self,
        current: SessionId,
        user: &AuthenticatedUser,
    ) -> ApplicationResult<SessionId> {
        let previous = self.store.load(current).await?.unwrap_or_default();
        self.store.delete(current).await?;

        let rotated = SessionId::generate();
        self.store
            .save(
                rotated,
                SessionData {
                    user_id: Some(user.id),
                    flashes: previous.flashes,
                },
            )
            .await?;

        tracing::info!(user_id = i64::from(user.id), "session bound to user");
        Ok(rotated)
    }

    /// Drops everything stored under `current` and returns a new anonymous
    /// id holding only `farewell`.
    pub async fn logout(
        &self,
        current: SessionId,
        farewell: FlashMessage,
    ) -> ApplicationResult<SessionId> {
        self.store.delete(current).await?;

        let flushed = SessionId::generate();
        self.store
            .save(
                flushed,
                SessionData {
                    user_id: None,
                    flashes: vec![farewell],
                },
            )
            .await?;
        Ok(flushed)
    }

    pub async fn flash(&self, id: SessionId, message: FlashMessage) -> ApplicationResult<()> {
        let mut data = self.store.load(id).await?.unwrap_or_default();
        data.flashes.push(message);
        self.store.save(id, data).await
    }

    /// Returns and clears the queued flashes.
    pub async fn take_flashes(&self, id: SessionId) -> ApplicationResult<Vec<FlashMessage>> {
        let Some(mut data) = self.store.load(id).await? else {
            return Ok(Vec::new());
        };
        if data.flashes.is_empty() {
            return Ok(Vec::new());
        }

        let flashes = std::mem::take(&mut data.flashes);
        if data.is_empty() {
            self.store.delete(id).await?;
        } else {
            self.store.save(id, data).await?;
        }
        Ok(flashes)
    }

    fn fresh() -> ResolvedSession {
        ResolvedSession {
            id: SessionId::generate(),
            user: None,
            is_new: true,
        }
    }
}
