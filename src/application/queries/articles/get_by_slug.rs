use super::ArticleQueryService;
use crate::application::{
    commands::{articles::ARTICLE_PERMISSION_DENIED, ensure_author},
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ArticleQueryService {
    pub async fn get_article_by_slug(&self, slug: &str) -> ApplicationResult<ArticleDto> {
        Ok(self.find_article(slug).await?.into())
    }

    /// The article as its author may edit it; anyone else is forbidden.
    pub async fn get_editable_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_article(slug).await?;
        ensure_author(actor, &article, ARTICLE_PERMISSION_DENIED)?;
        Ok(article.into())
    }
}
