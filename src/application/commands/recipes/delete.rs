// src/application/commands/recipes/delete.rs
use super::{DELETE_PERMISSION_DENIED, RecipeCommandService};
use crate::application::{
    commands::ensure_author,
    dto::{AuthenticatedUser, RecipeDto},
    error::ApplicationResult,
};

pub struct DeleteRecipeCommand {
    pub slug: String,
}

impl RecipeCommandService {
    pub async fn delete_recipe(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        let recipe = self.load_recipe(&command.slug).await?;
        ensure_author(actor, &recipe, DELETE_PERMISSION_DENIED)?;

        self.write_repo.delete(recipe.id).await?;
        tracing::info!(slug = recipe.slug.as_str(), "recipe deleted");
        Ok(recipe.into())
    }
}
