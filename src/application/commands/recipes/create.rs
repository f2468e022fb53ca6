// src/application/commands/recipes/create.rs
use super::RecipeCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::ApplicationResult,
        forms::recipe::RecipeForm,
    },
    domain::recipe::NewRecipe,
};

pub struct CreateRecipeCommand {
    pub form: RecipeForm,
}

impl RecipeCommandService {
    pub async fn create_recipe(
        &self,
        actor: &AuthenticatedUser,
        command: CreateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        let valid = command.form.validate()?;
        self.ensure_tags_exist(&valid.tag_ids).await?;

        let now = self.clock.now();
        let slug = self.slug_service.generate_unique_slug(&valid.title).await?;

        let new_recipe = NewRecipe {
            title: valid.title,
            slug,
            description: valid.description,
            author_id: actor.id,
            tag_ids: valid.tag_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_recipe).await?;
        tracing::info!(
            user_id = i64::from(actor.id),
            slug = created.slug.as_str(),
            tags = created.tags.len(),
            "recipe created"
        );
        Ok(created.into())
    }
}
