use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use cookbook_cms::application::{
    ApplicationResult,
    ports::{security::PasswordHasher, util::Clock},
};

pub const TEST_COOKIE_KEY: &[u8] = b"integration-test-cookie-signing-key-0123456789abcdef";

/// Stores passwords as `hashed:<plain>`; good enough to exercise the flows.
pub struct PlainPasswordHasher;

pub fn hash_of(password: &str) -> String {
    format!("hashed:{password}")
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(hash_of(password) == expected_hash)
    }
}

pub struct FixedClock;

impl FixedClock {
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Self::instant()
    }
}
