use super::RecipeQueryService;
use crate::{
    application::{
        commands::{ensure_author, recipes::PERMISSION_DENIED},
        dto::{AuthenticatedUser, IngredientDto, RecipeDetailDto, RecipeDto},
        error::ApplicationResult,
    },
    domain::{
        ownership::IsAuthorSpec,
        recipe::IngredientVisibility,
    },
};

impl RecipeQueryService {
    /// Recipe page data. Inactive ingredients are only shown to the author.
    pub async fn get_recipe_detail(
        &self,
        viewer: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<RecipeDetailDto> {
        let recipe = self.find_recipe(slug).await?;
        let is_author = IsAuthorSpec::new(&recipe, viewer.map(|user| user.id)).is_satisfied();

        let visibility = if is_author {
            IngredientVisibility::All
        } else {
            IngredientVisibility::ActiveOnly
        };
        let ingredients = self
            .ingredient_repo
            .list_for_recipe(recipe.id, visibility)
            .await?;

        Ok(RecipeDetailDto {
            recipe: recipe.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            is_author,
        })
    }

    pub async fn get_recipe(&self, slug: &str) -> ApplicationResult<RecipeDto> {
        Ok(self.find_recipe(slug).await?.into())
    }

    /// The recipe as its author may edit it; anyone else is forbidden.
    pub async fn get_editable_recipe(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<RecipeDto> {
        let recipe = self.find_recipe(slug).await?;
        ensure_author(actor, &recipe, PERMISSION_DENIED)?;
        Ok(recipe.into())
    }

    /// Recipe and ingredient for the ingredient edit and delete pages.
    /// Membership is checked before authorship.
    pub async fn get_editable_ingredient(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: &str,
        ingredient_id: i64,
    ) -> ApplicationResult<(RecipeDto, IngredientDto)> {
        let recipe = self.find_recipe(slug).await?;
        let ingredient = self.find_member_ingredient(&recipe, ingredient_id).await?;
        ensure_author(actor, &recipe, PERMISSION_DENIED)?;
        Ok((recipe.into(), ingredient.into()))
    }
}
