// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod ownership;
pub mod pagination;
pub mod recipe;
pub mod slug;
pub mod user;
