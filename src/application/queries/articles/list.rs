use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::pagination::PageNumber,
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    /// Raw `?page=` value.
    pub page: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Page<ArticleDto>> {
        let total = self.read_repo.count().await?;
        let position = PageNumber::resolve(query.page.as_deref(), total, self.page_size);

        let records = self.read_repo.list(position.window()).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, position))
    }
}
