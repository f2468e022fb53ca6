// src/domain/recipe/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{
    Ingredient, IngredientUpdate, IngredientVisibility, NewIngredient, NewRecipe, Recipe,
    RecipeFilter, RecipeUpdate, Tag,
};
pub use repository::{
    IngredientRepository, RecipeReadRepository, RecipeWriteRepository, TagRepository,
};
pub use value_objects::{
    IngredientId, IngredientQuantity, IngredientTitle, RecipeDescription, RecipeId, RecipeSlug,
    RecipeTitle, TagId, TagTitle,
};
