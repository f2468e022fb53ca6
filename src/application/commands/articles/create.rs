// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        forms::article::ArticleForm,
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub form: ArticleForm,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let valid = command.form.validate()?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&valid.title).await?;

        let new_article = NewArticle {
            title: valid.title,
            slug,
            content: valid.content,
            image: valid.image,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            user_id = i64::from(actor.id),
            slug = created.slug.as_str(),
            "article created"
        );
        Ok(created.into())
    }
}
