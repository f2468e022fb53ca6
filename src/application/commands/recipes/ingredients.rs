// src/application/commands/recipes/ingredients.rs
use super::{PERMISSION_DENIED, RecipeCommandService};
use crate::{
    application::{
        commands::ensure_author,
        dto::{AuthenticatedUser, IngredientDto},
        error::ApplicationResult,
        forms::recipe::IngredientForm,
    },
    domain::recipe::{IngredientUpdate, NewIngredient},
};

pub struct CreateIngredientCommand {
    pub slug: String,
    pub form: IngredientForm,
}

pub struct UpdateIngredientCommand {
    pub slug: String,
    pub ingredient_id: i64,
    pub form: IngredientForm,
}

pub struct DeleteIngredientCommand {
    pub slug: String,
    pub ingredient_id: i64,
}

impl RecipeCommandService {
    pub async fn create_ingredient(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreateIngredientCommand,
    ) -> ApplicationResult<IngredientDto> {
        let recipe = self.load_recipe(&command.slug).await?;
        ensure_author(actor, &recipe, PERMISSION_DENIED)?;

        let valid = command.form.validate()?;
        let created = self
            .ingredient_repo
            .insert(NewIngredient {
                recipe_id: recipe.id,
                title: valid.title,
                quantity: valid.quantity,
                is_active: valid.is_active,
            })
            .await?;

        tracing::info!(
            slug = recipe.slug.as_str(),
            ingredient_id = i64::from(created.id),
            "ingredient created"
        );
        Ok(created.into())
    }

    pub async fn update_ingredient(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateIngredientCommand,
    ) -> ApplicationResult<IngredientDto> {
        let recipe = self.load_recipe(&command.slug).await?;
        let ingredient = self
            .load_member_ingredient(&recipe, command.ingredient_id)
            .await?;
        ensure_author(actor, &recipe, PERMISSION_DENIED)?;

        let valid = command.form.validate()?;
        let updated = self
            .ingredient_repo
            .update(IngredientUpdate {
                id: ingredient.id,
                title: valid.title,
                quantity: valid.quantity,
                is_active: valid.is_active,
            })
            .await?;

        tracing::info!(
            slug = recipe.slug.as_str(),
            ingredient_id = i64::from(updated.id),
            "ingredient updated"
        );
        Ok(updated.into())
    }

    /// Returns the removed ingredient.
    pub async fn delete_ingredient(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteIngredientCommand,
    ) -> ApplicationResult<IngredientDto> {
        let recipe = self.load_recipe(&command.slug).await?;
        let ingredient = self
            .load_member_ingredient(&recipe, command.ingredient_id)
            .await?;
        ensure_author(actor, &recipe, PERMISSION_DENIED)?;

        self.ingredient_repo.delete(ingredient.id).await?;
        tracing::info!(
            slug = recipe.slug.as_str(),
            ingredient_id = i64::from(ingredient.id),
            "ingredient deleted"
        );
        Ok(ingredient.into())
    }
}
