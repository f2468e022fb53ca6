use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError, ports::sessions::SessionId},
    application::services::ResolvedSession,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Who is making the request, as resolved by the session middleware.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub session_id: SessionId,
    pub user: Option<AuthenticatedUser>,
}

impl RequestContext {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }
}

impl From<ResolvedSession> for RequestContext {
    fn from(session: ResolvedSession) -> Self {
        Self {
            session_id: session.id,
            user: session.user,
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestContext>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "session middleware not installed",
            ))
        })
    }
}
