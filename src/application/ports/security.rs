// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

/// Tamper-evident encoding of the session cookie value.
pub trait CookieSigner: Send + Sync {
    fn sign(&self, value: &str) -> String;
    /// The original value when the signature checks out.
    fn verify(&self, signed: &str) -> Option<String>;
}
