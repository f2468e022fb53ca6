// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod ingredients;
pub mod recipes;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}
