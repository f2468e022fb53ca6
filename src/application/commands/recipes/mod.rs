// src/application/commands/recipes/mod.rs
mod create;
mod delete;
mod ingredients;
mod service;
mod update;

pub use create::CreateRecipeCommand;
pub use delete::DeleteRecipeCommand;
pub use ingredients::{CreateIngredientCommand, DeleteIngredientCommand, UpdateIngredientCommand};
pub use service::RecipeCommandService;
pub use update::UpdateRecipeCommand;

pub const DELETE_PERMISSION_DENIED: &str = "You have no enough permission to delete.";
pub const PERMISSION_DENIED: &str = "You have no enough permissions";
