// src/application/commands/mod.rs
pub mod articles;
mod ownership;
pub mod recipes;
pub mod users;

pub(crate) use ownership::ensure_author;
