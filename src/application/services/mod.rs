// src/application/services/mod.rs
pub mod sessions;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, recipes::RecipeCommandService,
            users::UserCommandService,
        },
        ports::{
            security::PasswordHasher,
            sessions::SessionStore,
            util::{Clock, SlugGenerator},
        },
        queries::{articles::ArticleQueryService, recipes::RecipeQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        recipe::{
            IngredientRepository, RecipeReadRepository, RecipeWriteRepository, TagRepository,
            services::RecipeSlugService,
        },
        user::UserRepository,
    },
};

pub use sessions::{ResolvedSession, SessionService};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub recipe_commands: Arc<RecipeCommandService>,
    pub recipe_queries: Arc<RecipeQueryService>,
    pub sessions: Arc<SessionService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        recipe_write_repo: Arc<dyn RecipeWriteRepository>,
        recipe_read_repo: Arc<dyn RecipeReadRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        tag_repo: Arc<dyn TagRepository>,
        session_store: Arc<dyn SessionStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        page_size: u32,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));

        let article_slugs = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            article_slugs,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            page_size,
        ));

        let recipe_slugs = Arc::new(RecipeSlugService::new(
            Arc::clone(&recipe_read_repo),
            Arc::clone(&slugger),
        ));
        let recipe_commands = Arc::new(RecipeCommandService::new(
            Arc::clone(&recipe_write_repo),
            Arc::clone(&recipe_read_repo),
            Arc::clone(&ingredient_repo),
            Arc::clone(&tag_repo),
            recipe_slugs,
            Arc::clone(&clock),
        ));
        let recipe_queries = Arc::new(RecipeQueryService::new(
            Arc::clone(&recipe_read_repo),
            Arc::clone(&ingredient_repo),
            Arc::clone(&tag_repo),
            page_size,
        ));

        let sessions = Arc::new(SessionService::new(session_store, user_repo));

        Self {
            user_commands,
            article_commands,
            article_queries,
            recipe_commands,
            recipe_queries,
            sessions,
        }
    }
}
