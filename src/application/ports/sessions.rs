// src/application/ports/sessions.rs
use crate::application::{ApplicationResult, dto::FlashMessage};
use crate::domain::user::UserId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub flashes: Vec<FlashMessage>,
}

impl SessionData {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.flashes.is_empty()
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: SessionId) -> ApplicationResult<Option<SessionData>>;
    async fn save(&self, id: SessionId, data: SessionData) -> ApplicationResult<()>;
    async fn delete(&self, id: SessionId) -> ApplicationResult<()>;
}
