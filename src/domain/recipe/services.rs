// src/domain/recipe/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::repository::RecipeReadRepository;
use crate::domain::recipe::value_objects::{RecipeSlug, RecipeTitle};
use crate::domain::slug::slug_candidates;

pub struct RecipeSlugService {
    read_repo: Arc<dyn RecipeReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl RecipeSlugService {
    pub fn new(
        read_repo: Arc<dyn RecipeReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(&self, title: &RecipeTitle) -> DomainResult<RecipeSlug> {
        let base = self.generator.slugify(title.as_str());

        for candidate in slug_candidates(&base, "recipe") {
            let slug = RecipeSlug::new(candidate)?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }

        Err(DomainError::Conflict("no free slug for recipe title".into()))
    }
}
