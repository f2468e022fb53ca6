//! Server-rendered cookbook: recipes with ingredients and tags, articles,
//! and cookie-session authentication.
//!
//! Layers, inside out: `domain` (entities, value objects, repository
//! traits), `application` (forms, commands, queries, session service),
//! `infrastructure` (Postgres, argon2, cookie signing, session stores) and
//! `presentation` (axum routes and maud views).

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
