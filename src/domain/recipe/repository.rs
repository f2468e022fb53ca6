// src/domain/recipe/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageWindow;
use crate::domain::recipe::entity::{
    Ingredient, IngredientUpdate, IngredientVisibility, NewIngredient, NewRecipe, Recipe,
    RecipeFilter, RecipeUpdate, Tag,
};
use crate::domain::recipe::value_objects::{IngredientId, RecipeId, RecipeSlug, TagId};
use async_trait::async_trait;

#[async_trait]
pub trait RecipeReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>>;
    async fn count(&self, filter: &RecipeFilter) -> DomainResult<u64>;
    /// Newest first (descending id).
    async fn list(&self, filter: &RecipeFilter, window: PageWindow) -> DomainResult<Vec<Recipe>>;
}

#[async_trait]
pub trait RecipeWriteRepository: Send + Sync {
    /// Persists the recipe, then its tag links, atomically.
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe>;
    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe>;
    /// Removes the recipe together with its ingredients and tag links.
    async fn delete(&self, id: RecipeId) -> DomainResult<()>;
}

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn find_by_id(&self, id: IngredientId) -> DomainResult<Option<Ingredient>>;
    async fn list_for_recipe(
        &self,
        recipe_id: RecipeId,
        visibility: IngredientVisibility,
    ) -> DomainResult<Vec<Ingredient>>;
    async fn insert(&self, ingredient: NewIngredient) -> DomainResult<Ingredient>;
    async fn update(&self, update: IngredientUpdate) -> DomainResult<Ingredient>;
    async fn delete(&self, id: IngredientId) -> DomainResult<()>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
}
