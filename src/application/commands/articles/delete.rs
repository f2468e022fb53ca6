// src/application/commands/articles/delete.rs
use super::{ARTICLE_PERMISSION_DENIED, ArticleCommandService};
use crate::application::{
    commands::ensure_author,
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Returns the removed article.
    pub async fn delete_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_article(&command.slug).await?;
        ensure_author(actor, &article, ARTICLE_PERMISSION_DENIED)?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(slug = article.slug.as_str(), "article deleted");
        Ok(article.into())
    }
}
