// src/application/commands/ownership.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::ownership::{Authored, IsAuthorSpec};

pub(crate) fn ensure_author<T: Authored + ?Sized>(
    actor: Option<&AuthenticatedUser>,
    resource: &T,
    denial: &str,
) -> ApplicationResult<()> {
    if IsAuthorSpec::new(resource, actor.map(|user| user.id)).is_satisfied() {
        Ok(())
    } else {
        tracing::warn!(
            user_id = actor.map(|user| i64::from(user.id)),
            author_id = i64::from(resource.author_id()),
            "ownership check failed"
        );
        Err(ApplicationError::forbidden(denial))
    }
}
