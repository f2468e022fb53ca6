use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleReadRepository, ArticleSlug},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) page_size: u32,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, page_size: u32) -> Self {
        Self {
            read_repo,
            page_size,
        }
    }

    pub(super) async fn find_article(&self, slug: &str) -> ApplicationResult<Article> {
        let slug =
            ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
