// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::sessions::{SessionData, SessionId, SessionStore};
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

const KEY_PREFIX: &str = "session:";

/// Sessions as JSON blobs under `session:<uuid>`, expiring through Redis TTLs.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
    ttl_secs: u64,
}

impl RedisSessionStore {
    /// Create a new Redis backed session store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str, ttl_secs: u64) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool, ttl_secs })
    }

    async fn conn(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn key(id: SessionId) -> String {
        format!("{KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: SessionId) -> ApplicationResult<Option<SessionData>> {
        let mut conn = self.conn().await?;
        let raw: Option<String> = conn
            .get(Self::key(id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(data) => Ok(Some(data)),
                Err(err) => {
                    // Unreadable payloads are treated as an expired session.
                    tracing::warn!(error = %err, "discarding undecodable session payload");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn save(&self, id: SessionId, data: SessionData) -> ApplicationResult<()> {
        let json = serde_json::to_string(&data)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(Self::key(id), json, self.ttl_secs)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: SessionId) -> ApplicationResult<()> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(Self::key(id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
