// src/application/commands/recipes/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        forms::{FormErrors, recipe::INVALID_TAG_CHOICE},
        ports::util::Clock,
    },
    domain::recipe::{
        Ingredient, IngredientId, IngredientRepository, Recipe, RecipeReadRepository, RecipeSlug,
        RecipeWriteRepository, TagId, TagRepository, services::RecipeSlugService,
    },
};

pub struct RecipeCommandService {
    pub(super) write_repo: Arc<dyn RecipeWriteRepository>,
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) ingredient_repo: Arc<dyn IngredientRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<RecipeSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecipeCommandService {
    pub fn new(
        write_repo: Arc<dyn RecipeWriteRepository>,
        read_repo: Arc<dyn RecipeReadRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<RecipeSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            ingredient_repo,
            tag_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_recipe(&self, slug: &str) -> ApplicationResult<Recipe> {
        let slug =
            RecipeSlug::new(slug).map_err(|_| ApplicationError::not_found("recipe not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))
    }

    /// Not-found both when the ingredient is missing and when it hangs off
    /// another recipe.
    pub(super) async fn load_member_ingredient(
        &self,
        recipe: &Recipe,
        id: i64,
    ) -> ApplicationResult<Ingredient> {
        let id = IngredientId::new(id)
            .map_err(|_| ApplicationError::not_found("ingredient not found"))?;
        let ingredient = self
            .ingredient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("ingredient not found"))?;

        if !ingredient.belongs_to(recipe) {
            return Err(ApplicationError::not_found(format!(
                "{} does not exist in {} recipe",
                ingredient.title, recipe.title
            )));
        }
        Ok(ingredient)
    }

    /// Every submitted tag id must name an existing tag.
    pub(super) async fn ensure_tags_exist(&self, tag_ids: &[TagId]) -> ApplicationResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let found = self.tag_repo.find_by_ids(tag_ids).await?;
        if found.len() == tag_ids.len() {
            Ok(())
        } else {
            let mut errors = FormErrors::new();
            errors.add("tags", INVALID_TAG_CHOICE);
            Err(errors.into())
        }
    }
}
