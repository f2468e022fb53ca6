// src/infrastructure/security/mod.rs
pub mod cookie;
pub mod password;
pub mod redis_session_store;
pub mod session_store;
