// src/domain/ownership.rs
use crate::domain::user::UserId;

/// Anything with a single owning user.
pub trait Authored {
    fn author_id(&self) -> UserId;
}

/// Grants mutation rights to the author and to nobody else.
pub struct IsAuthorSpec<'a, T: Authored + ?Sized> {
    resource: &'a T,
    viewer: Option<UserId>,
}

impl<'a, T: Authored + ?Sized> IsAuthorSpec<'a, T> {
    pub fn new(resource: &'a T, viewer: Option<UserId>) -> Self {
        Self { resource, viewer }
    }

    pub fn is_satisfied(&self) -> bool {
        self.viewer
            .map(|id| id == self.resource.author_id())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Owned(UserId);

    impl Authored for Owned {
        fn author_id(&self) -> UserId {
            self.0
        }
    }

    #[test]
    fn author_is_permitted() {
        let owner = UserId::new(7).unwrap();
        let item = Owned(owner);
        assert!(IsAuthorSpec::new(&item, Some(owner)).is_satisfied());
    }

    #[test]
    fn other_users_and_anonymous_are_denied() {
        let item = Owned(UserId::new(7).unwrap());
        assert!(!IsAuthorSpec::new(&item, Some(UserId::new(8).unwrap())).is_satisfied());
        assert!(!IsAuthorSpec::new(&item, None).is_satisfied());
    }
}
