use crate::application::ApplicationResult;
use crate::application::ports::sessions::{SessionData, SessionId, SessionStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Entry {
    data: SessionData,
    expires_at: Instant,
}

/// Process-local session store. Entries expire `ttl` after their last save.
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<SessionId, Entry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<SessionId, Entry>> {
        // Every mutation is a single map call, so a poisoned map is still whole.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> ApplicationResult<Option<SessionData>> {
        let mut entries = self.entries();
        let now = Instant::now();
        match entries.get(&id) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.data.clone())),
            Some(_) => {
                entries.remove(&id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn save(&self, id: SessionId, data: SessionData) -> ApplicationResult<()> {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.entries();
        entries.retain(|_, entry| entry.expires_at > Instant::now());
        entries.insert(id, Entry { data, expires_at });
        Ok(())
    }

    async fn delete(&self, id: SessionId) -> ApplicationResult<()> {
        self.entries().remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::FlashMessage;
    use crate::domain::user::UserId;

    #[tokio::test]
    async fn save_load_delete() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let id = SessionId::generate();
        let data = SessionData {
            user_id: Some(UserId::new(3).unwrap()),
            flashes: vec![FlashMessage::info("hello")],
        };

        store.save(id, data.clone()).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), Some(data));

        store.delete(id).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_entries_are_gone() {
        let store = InMemorySessionStore::new(Duration::ZERO);
        let id = SessionId::generate();
        store.save(id, SessionData::default()).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), None);
    }
}
