// src/application/commands/articles/update.rs
use super::{ARTICLE_PERMISSION_DENIED, ArticleCommandService};
use crate::{
    application::{
        commands::ensure_author,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        forms::article::ArticleForm,
    },
    domain::article::ArticleUpdate,
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub form: ArticleForm,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(&command.slug).await?;
        ensure_author(actor, &article, ARTICLE_PERMISSION_DENIED)?;

        let valid = command.form.validate()?;
        article.set_content(valid.title, valid.content, valid.image, self.clock.now());

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(slug = updated.slug.as_str(), "article updated");
        Ok(updated.into())
    }
}
