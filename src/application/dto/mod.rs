// src/application/dto/mod.rs
pub mod articles;
pub mod pagination;
pub mod recipes;
pub mod sessions;
pub mod users;

pub use articles::ArticleDto;
pub use pagination::Page;
pub use recipes::{IngredientDto, RecipeDetailDto, RecipeDto, TagDto};
pub use sessions::{FlashLevel, FlashMessage};
pub use users::{AuthenticatedUser, UserDto};
