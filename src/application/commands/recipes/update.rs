// src/application/commands/recipes/update.rs
use super::{PERMISSION_DENIED, RecipeCommandService};
use crate::{
    application::{
        commands::ensure_author,
        dto::{AuthenticatedUser, RecipeDto},
        error::ApplicationResult,
        forms::recipe::RecipeForm,
    },
    domain::recipe::RecipeUpdate,
};

pub struct UpdateRecipeCommand {
    pub slug: String,
    pub form: RecipeForm,
}

impl RecipeCommandService {
    pub async fn update_recipe(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        let recipe = self.load_recipe(&command.slug).await?;
        ensure_author(actor, &recipe, PERMISSION_DENIED)?;

        let valid = command.form.validate()?;
        self.ensure_tags_exist(&valid.tag_ids).await?;

        let update = RecipeUpdate {
            id: recipe.id,
            title: valid.title,
            description: valid.description,
            tag_ids: valid.tag_ids,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(slug = updated.slug.as_str(), "recipe updated");
        Ok(updated.into())
    }
}
