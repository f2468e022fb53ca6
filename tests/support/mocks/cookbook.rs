use super::security::{FixedClock, hash_of};
use async_trait::async_trait;
use cookbook_cms::domain::{
    article::{
        Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
        ArticleUpdate, ArticleWriteRepository, NewArticle,
    },
    errors::{DomainError, DomainResult},
    pagination::PageWindow,
    recipe::{
        Ingredient, IngredientId, IngredientRepository, IngredientTitle, IngredientUpdate,
        IngredientVisibility, NewIngredient, NewRecipe, Recipe, RecipeDescription, RecipeFilter,
        RecipeId, RecipeReadRepository, RecipeSlug, RecipeTitle, RecipeUpdate,
        RecipeWriteRepository, Tag, TagId, TagRepository, TagTitle,
    },
    user::{NewUser, PasswordHash, User, UserId, UserRepository, Username},
};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Data {
    next_id: i64,
    users: Vec<User>,
    articles: Vec<Article>,
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
    tags: Vec<Tag>,
}

impl Data {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn tags_for(&self, ids: &[TagId]) -> Vec<Tag> {
        self.tags
            .iter()
            .filter(|tag| ids.contains(&tag.id))
            .cloned()
            .collect()
    }
}

fn window<T: Clone>(items: Vec<T>, window: PageWindow) -> Vec<T> {
    items
        .into_iter()
        .skip(window.offset as usize)
        .take(window.limit as usize)
        .collect()
}

/// One in-memory backing store implementing every repository trait, so
/// recipes, tags and ingredients stay consistent with each other.
#[derive(Default)]
pub struct InMemoryCookbook {
    data: Mutex<Data>,
}

impl InMemoryCookbook {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Data> {
        self.data.lock().unwrap()
    }

    pub fn seed_user(&self, username: &str, password: &str) -> UserId {
        self.insert_user(username, password, true)
    }

    pub fn seed_inactive_user(&self, username: &str, password: &str) -> UserId {
        self.insert_user(username, password, false)
    }

    fn insert_user(&self, username: &str, password: &str, is_active: bool) -> UserId {
        let mut data = self.lock();
        let id = UserId::new(data.next_id()).unwrap();
        data.users.push(User {
            id,
            username: Username::new(username).unwrap(),
            password_hash: PasswordHash::new(hash_of(password)).unwrap(),
            is_active,
            created_at: FixedClock::instant(),
        });
        id
    }

    pub fn seed_tag(&self, title: &str) -> TagId {
        let mut data = self.lock();
        let id = TagId::new(data.next_id()).unwrap();
        data.tags.push(Tag {
            id,
            title: TagTitle::new(title).unwrap(),
        });
        id
    }

    pub fn seed_recipe(&self, author: UserId, title: &str, slug: &str, tags: &[TagId]) -> RecipeId {
        let mut data = self.lock();
        let id = RecipeId::new(data.next_id()).unwrap();
        let tags = data.tags_for(tags);
        data.recipes.push(Recipe {
            id,
            title: RecipeTitle::new(title).unwrap(),
            slug: RecipeSlug::new(slug).unwrap(),
            description: RecipeDescription::new(""),
            author_id: author,
            tags,
            created_at: FixedClock::instant(),
            updated_at: FixedClock::instant(),
        });
        id
    }

    pub fn seed_ingredient(&self, recipe: RecipeId, title: &str, is_active: bool) -> IngredientId {
        let mut data = self.lock();
        let id = IngredientId::new(data.next_id()).unwrap();
        data.ingredients.push(Ingredient {
            id,
            recipe_id: recipe,
            title: IngredientTitle::new(title).unwrap(),
            quantity: None,
            is_active,
        });
        id
    }

    pub fn seed_article(&self, author: UserId, title: &str, slug: &str, content: &str) -> ArticleId {
        let mut data = self.lock();
        let id = ArticleId::new(data.next_id()).unwrap();
        data.articles.push(Article {
            id,
            title: ArticleTitle::new(title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new(content).unwrap(),
            image: None,
            author_id: author,
            created_at: FixedClock::instant(),
            updated_at: FixedClock::instant(),
        });
        id
    }

    pub fn recipe(&self, slug: &str) -> Option<Recipe> {
        self.lock()
            .recipes
            .iter()
            .find(|recipe| recipe.slug.as_str() == slug)
            .cloned()
    }

    pub fn recipe_count(&self) -> usize {
        self.lock().recipes.len()
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<Ingredient> {
        self.lock()
            .ingredients
            .iter()
            .find(|ingredient| ingredient.id == id)
            .cloned()
    }

    pub fn ingredients_of(&self, recipe: RecipeId) -> Vec<Ingredient> {
        self.lock()
            .ingredients
            .iter()
            .filter(|ingredient| ingredient.recipe_id == recipe)
            .cloned()
            .collect()
    }

    pub fn article(&self, slug: &str) -> Option<Article> {
        self.lock()
            .articles
            .iter()
            .find(|article| article.slug.as_str() == slug)
            .cloned()
    }

    pub fn user(&self, username: &str) -> Option<User> {
        self.lock()
            .users
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryCookbook {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut data = self.lock();
        if data.users.iter().any(|user| user.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(data.next_id())?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        data.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock().users.iter().find(|user| user.id == id).cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryCookbook {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut data = self.lock();
        if data.articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("article slug already exists".into()));
        }
        let stored = Article {
            id: ArticleId::new(data.next_id())?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            image: article.image,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        data.articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut data = self.lock();
        let article = data
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.set_content(update.title, update.content, update.image, update.updated_at);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut data = self.lock();
        let before = data.articles.len();
        data.articles.retain(|a| a.id != id);
        if data.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryCookbook {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.lock().articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().articles.len() as u64)
    }

    async fn list(&self, page: PageWindow) -> DomainResult<Vec<Article>> {
        let mut articles = self.lock().articles.clone();
        articles.sort_by(|a, b| b.id.0.cmp(&a.id.0));
        Ok(window(articles, page))
    }
}

#[async_trait]
impl RecipeReadRepository for InMemoryCookbook {
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        Ok(self.lock().recipes.iter().find(|r| &r.slug == slug).cloned())
    }

    async fn count(&self, filter: &RecipeFilter) -> DomainResult<u64> {
        Ok(self
            .lock()
            .recipes
            .iter()
            .filter(|recipe| filter.matches(recipe))
            .count() as u64)
    }

    async fn list(&self, filter: &RecipeFilter, page: PageWindow) -> DomainResult<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .lock()
            .recipes
            .iter()
            .filter(|recipe| filter.matches(recipe))
            .cloned()
            .collect();
        recipes.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(window(recipes, page))
    }
}

#[async_trait]
impl RecipeWriteRepository for InMemoryCookbook {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let mut data = self.lock();
        if data.recipes.iter().any(|r| r.slug == recipe.slug) {
            return Err(DomainError::Conflict("recipe slug already exists".into()));
        }
        let stored = Recipe {
            id: RecipeId::new(data.next_id())?,
            title: recipe.title,
            slug: recipe.slug,
            description: recipe.description,
            author_id: recipe.author_id,
            tags: data.tags_for(&recipe.tag_ids),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        };
        data.recipes.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let mut data = self.lock();
        let tags = data.tags_for(&update.tag_ids);
        let recipe = data
            .recipes
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| DomainError::NotFound("recipe not found".into()))?;
        recipe.title = update.title;
        recipe.description = update.description;
        recipe.tags = tags;
        recipe.updated_at = update.updated_at;
        Ok(recipe.clone())
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        let mut data = self.lock();
        data.recipes.retain(|r| r.id != id);
        data.ingredients.retain(|i| i.recipe_id != id);
        Ok(())
    }
}

#[async_trait]
impl IngredientRepository for InMemoryCookbook {
    async fn find_by_id(&self, id: IngredientId) -> DomainResult<Option<Ingredient>> {
        Ok(self.ingredient(id))
    }

    async fn list_for_recipe(
        &self,
        recipe_id: RecipeId,
        visibility: IngredientVisibility,
    ) -> DomainResult<Vec<Ingredient>> {
        Ok(self
            .ingredients_of(recipe_id)
            .into_iter()
            .filter(|ingredient| visibility.admits(ingredient))
            .collect())
    }

    async fn insert(&self, ingredient: NewIngredient) -> DomainResult<Ingredient> {
        let mut data = self.lock();
        let stored = Ingredient {
            id: IngredientId::new(data.next_id())?,
            recipe_id: ingredient.recipe_id,
            title: ingredient.title,
            quantity: ingredient.quantity,
            is_active: ingredient.is_active,
        };
        data.ingredients.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: IngredientUpdate) -> DomainResult<Ingredient> {
        let mut data = self.lock();
        let ingredient = data
            .ingredients
            .iter_mut()
            .find(|i| i.id == update.id)
            .ok_or_else(|| DomainError::NotFound("ingredient not found".into()))?;
        ingredient.title = update.title;
        ingredient.quantity = update.quantity;
        ingredient.is_active = update.is_active;
        Ok(ingredient.clone())
    }

    async fn delete(&self, id: IngredientId) -> DomainResult<()> {
        self.lock().ingredients.retain(|i| i.id != id);
        Ok(())
    }
}

#[async_trait]
impl TagRepository for InMemoryCookbook {
    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.lock().tags.clone();
        tags.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(tags)
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        Ok(self.lock().tags_for(ids))
    }
}
