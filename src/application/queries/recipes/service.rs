use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::recipe::{
        Ingredient, IngredientId, IngredientRepository, Recipe, RecipeReadRepository, RecipeSlug,
        TagRepository,
    },
};

pub struct RecipeQueryService {
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) ingredient_repo: Arc<dyn IngredientRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) page_size: u32,
}

impl RecipeQueryService {
    pub fn new(
        read_repo: Arc<dyn RecipeReadRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        tag_repo: Arc<dyn TagRepository>,
        page_size: u32,
    ) -> Self {
        Self {
            read_repo,
            ingredient_repo,
            tag_repo,
            page_size,
        }
    }

    pub(super) async fn find_recipe(&self, slug: &str) -> ApplicationResult<Recipe> {
        let slug =
            RecipeSlug::new(slug).map_err(|_| ApplicationError::not_found("recipe not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))
    }

    pub(super) async fn find_member_ingredient(
        &self,
        recipe: &Recipe,
        id: i64,
    ) -> ApplicationResult<Ingredient> {
        let missing = || ApplicationError::not_found("ingredient not found");
        let id = IngredientId::new(id).map_err(|_| missing())?;
        self.ingredient_repo
            .find_by_id(id)
            .await?
            .filter(|ingredient| ingredient.belongs_to(recipe))
            .ok_or_else(missing)
    }
}
