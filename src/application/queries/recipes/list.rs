use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, Page, RecipeDto, TagDto},
        error::ApplicationResult,
    },
    domain::{
        pagination::PageNumber,
        recipe::{RecipeFilter, TagTitle},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListRecipesQuery {
    /// Tag title to filter by; blank means no filter.
    pub tag: Option<String>,
    /// Raw `?page=` value.
    pub page: Option<String>,
}

impl ListRecipesQuery {
    fn filter(&self) -> RecipeFilter {
        RecipeFilter {
            author_id: None,
            tag: self
                .tag
                .as_deref()
                .and_then(|title| TagTitle::new(title).ok()),
        }
    }
}

impl RecipeQueryService {
    pub async fn list_recipes(&self, query: ListRecipesQuery) -> ApplicationResult<Page<RecipeDto>> {
        self.list_filtered(query.filter(), query.page.as_deref()).await
    }

    /// Recipes authored by `actor`, with the same tag and page handling.
    pub async fn list_my_recipes(
        &self,
        actor: &AuthenticatedUser,
        query: ListRecipesQuery,
    ) -> ApplicationResult<Page<RecipeDto>> {
        let filter = RecipeFilter {
            author_id: Some(actor.id),
            ..query.filter()
        };
        self.list_filtered(filter, query.page.as_deref()).await
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list_all().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn list_filtered(
        &self,
        filter: RecipeFilter,
        page: Option<&str>,
    ) -> ApplicationResult<Page<RecipeDto>> {
        let total = self.read_repo.count(&filter).await?;
        let position = PageNumber::resolve(page, total, self.page_size);

        let records = self.read_repo.list(&filter, position.window()).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, position))
    }
}
