// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_recipe;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_recipe::{
    PostgresIngredientRepository, PostgresRecipeReadRepository, PostgresRecipeWriteRepository,
    PostgresTagRepository,
};
pub use postgres_user::PostgresUserRepository;
