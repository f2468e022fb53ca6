// src/domain/article/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::slug_candidates;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());

        for candidate in slug_candidates(&base, "article") {
            let slug = ArticleSlug::new(candidate)?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }

        Err(DomainError::Conflict("no free slug for article title".into()))
    }
}
