// src/application/dto/recipes.rs
use crate::domain::recipe::{Ingredient, Recipe, Tag};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDto {
    pub id: i64,
    pub title: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            title: tag.title.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub author_id: i64,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.into(),
            title: recipe.title.into(),
            slug: recipe.slug.into(),
            description: recipe.description.into(),
            author_id: recipe.author_id.into(),
            tags: recipe.tags.into_iter().map(Into::into).collect(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientDto {
    pub id: i64,
    pub recipe_id: i64,
    pub title: String,
    pub quantity: Option<String>,
    pub is_active: bool,
}

impl From<Ingredient> for IngredientDto {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.into(),
            recipe_id: ingredient.recipe_id.into(),
            title: ingredient.title.into(),
            quantity: ingredient.quantity.map(Into::into),
            is_active: ingredient.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetailDto {
    pub recipe: RecipeDto,
    pub ingredients: Vec<IngredientDto>,
    pub is_author: bool,
}
