// src/infrastructure/repositories/postgres_recipe.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageWindow;
use crate::domain::recipe::{
    Ingredient, IngredientId, IngredientQuantity, IngredientRepository, IngredientTitle,
    IngredientUpdate, IngredientVisibility, NewIngredient, NewRecipe, Recipe, RecipeDescription,
    RecipeFilter, RecipeId, RecipeReadRepository, RecipeSlug, RecipeTitle, RecipeUpdate,
    RecipeWriteRepository, Tag, TagId, TagRepository, TagTitle,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashMap;

const RECIPE_COLUMNS: &str = "id, title, slug, description, author_id, created_at, updated_at";
const INGREDIENT_COLUMNS: &str = "id, recipe_id, title, quantity, is_active";

#[derive(Clone)]
pub struct PostgresRecipeReadRepository {
    pool: PgPool,
}

impl PostgresRecipeReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresRecipeWriteRepository {
    pool: PgPool,
}

impl PostgresRecipeWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresIngredientRepository {
    pool: PgPool,
}

impl PostgresIngredientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecipeRow {
    fn into_recipe(self, tags: Vec<Tag>) -> DomainResult<Recipe> {
        Ok(Recipe {
            id: RecipeId::new(self.id)?,
            title: RecipeTitle::new(self.title)?,
            slug: RecipeSlug::new(self.slug)?,
            description: RecipeDescription::new(self.description),
            author_id: UserId::new(self.author_id)?,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    title: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            title: TagTitle::new(row.title)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct RecipeTagRow {
    recipe_id: i64,
    id: i64,
    title: String,
}

#[derive(Debug, FromRow)]
struct IngredientRow {
    id: i64,
    recipe_id: i64,
    title: String,
    quantity: Option<String>,
    is_active: bool,
}

impl TryFrom<IngredientRow> for Ingredient {
    type Error = DomainError;

    fn try_from(row: IngredientRow) -> Result<Self, Self::Error> {
        Ok(Ingredient {
            id: IngredientId::new(row.id)?,
            recipe_id: RecipeId::new(row.recipe_id)?,
            title: IngredientTitle::new(row.title)?,
            quantity: row.quantity.map(IngredientQuantity::new).transpose()?,
            is_active: row.is_active,
        })
    }
}

/// Loads the tag sets of `recipe_ids` in one round trip, ordered by title.
async fn tags_by_recipe<'e, E>(executor: E, recipe_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Tag>>>
where
    E: sqlx::PgExecutor<'e>,
{
    let mut grouped: HashMap<i64, Vec<Tag>> = HashMap::new();
    if recipe_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = sqlx::query_as::<_, RecipeTagRow>(
        "SELECT rt.recipe_id, t.id, t.title
         FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id
         WHERE rt.recipe_id = ANY($1)
         ORDER BY t.title",
    )
    .bind(recipe_ids)
    .fetch_all(executor)
    .await
    .map_err(map_sqlx)?;

    for row in rows {
        let tag = Tag::try_from(TagRow {
            id: row.id,
            title: row.title,
        })?;
        grouped.entry(row.recipe_id).or_default().push(tag);
    }
    Ok(grouped)
}

fn attach_tags(rows: Vec<RecipeRow>, mut tags: HashMap<i64, Vec<Tag>>) -> DomainResult<Vec<Recipe>> {
    rows.into_iter()
        .map(|row| {
            let recipe_tags = tags.remove(&row.id).unwrap_or_default();
            row.into_recipe(recipe_tags)
        })
        .collect()
}

async fn link_tags(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = tag_ids.iter().map(|id| i64::from(*id)).collect();
    sqlx::query(
        "INSERT INTO recipe_tags (recipe_id, tag_id)
         SELECT $1, tag_id FROM UNNEST($2::BIGINT[]) AS tag_id
         ON CONFLICT DO NOTHING",
    )
    .bind(recipe_id)
    .bind(&ids)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

impl PostgresRecipeReadRepository {
    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &RecipeFilter) {
        builder.push(" WHERE TRUE");
        if let Some(author_id) = filter.author_id {
            builder.push(" AND author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(tag) = &filter.tag {
            builder.push(
                " AND EXISTS (SELECT 1 FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id
                  WHERE rt.recipe_id = recipes.id AND t.title = ",
            );
            builder.push_bind(tag.as_str().to_owned());
            builder.push(")");
        }
    }
}

#[async_trait]
impl RecipeReadRepository for PostgresRecipeReadRepository {
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let tags = tags_by_recipe(&self.pool, &[row.id]).await?;
        attach_tags(vec![row], tags).map(|mut recipes| recipes.pop())
    }

    async fn count(&self, filter: &RecipeFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(1) FROM recipes");
        Self::push_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn list(&self, filter: &RecipeFilter, window: PageWindow) -> DomainResult<Vec<Recipe>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {RECIPE_COLUMNS} FROM recipes"));
        Self::push_filter(&mut builder, filter);
        builder.push(" ORDER BY id DESC LIMIT ");
        builder.push_bind(i64::from(window.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(window.offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<RecipeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let tags = tags_by_recipe(&self.pool, &ids).await?;
        attach_tags(rows, tags)
    }
}

#[async_trait]
impl RecipeWriteRepository for PostgresRecipeWriteRepository {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let NewRecipe {
            title,
            slug,
            description,
            author_id,
            tag_ids,
            created_at,
            updated_at,
        } = recipe;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, RecipeRow>(&format!(
            "INSERT INTO recipes (title, slug, description, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        link_tags(&mut tx, row.id, &tag_ids).await?;
        let tags = tags_by_recipe(&mut *tx, &[row.id]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        attach_tags(vec![row], tags)?
            .pop()
            .ok_or_else(|| DomainError::Persistence("inserted recipe vanished".into()))
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let RecipeUpdate {
            id,
            title,
            description,
            tag_ids,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, RecipeRow>(&format!(
            "UPDATE recipes SET title = $1, description = $2, updated_at = $3
             WHERE id = $4
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("recipe not found".into()))?;

        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        link_tags(&mut tx, row.id, &tag_ids).await?;
        let tags = tags_by_recipe(&mut *tx, &[row.id]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        attach_tags(vec![row], tags)?
            .pop()
            .ok_or_else(|| DomainError::Persistence("updated recipe vanished".into()))
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        // Ingredients and tag links go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl IngredientRepository for PostgresIngredientRepository {
    async fn find_by_id(&self, id: IngredientId) -> DomainResult<Option<Ingredient>> {
        let row = sqlx::query_as::<_, IngredientRow>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Ingredient::try_from).transpose()
    }

    async fn list_for_recipe(
        &self,
        recipe_id: RecipeId,
        visibility: IngredientVisibility,
    ) -> DomainResult<Vec<Ingredient>> {
        let active_only = matches!(visibility, IngredientVisibility::ActiveOnly);
        let rows = sqlx::query_as::<_, IngredientRow>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients
             WHERE recipe_id = $1 AND (is_active OR NOT $2)
             ORDER BY id"
        ))
        .bind(i64::from(recipe_id))
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Ingredient::try_from).collect()
    }

    async fn insert(&self, ingredient: NewIngredient) -> DomainResult<Ingredient> {
        let NewIngredient {
            recipe_id,
            title,
            quantity,
            is_active,
        } = ingredient;

        let row = sqlx::query_as::<_, IngredientRow>(&format!(
            "INSERT INTO ingredients (recipe_id, title, quantity, is_active)
             VALUES ($1, $2, $3, $4)
             RETURNING {INGREDIENT_COLUMNS}"
        ))
        .bind(i64::from(recipe_id))
        .bind(title.as_str())
        .bind(quantity.as_ref().map(IngredientQuantity::as_str))
        .bind(is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ingredient::try_from(row)
    }

    async fn update(&self, update: IngredientUpdate) -> DomainResult<Ingredient> {
        let IngredientUpdate {
            id,
            title,
            quantity,
            is_active,
        } = update;

        let row = sqlx::query_as::<_, IngredientRow>(&format!(
            "UPDATE ingredients SET title = $1, quantity = $2, is_active = $3
             WHERE id = $4
             RETURNING {INGREDIENT_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(quantity.as_ref().map(IngredientQuantity::as_str))
        .bind(is_active)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("ingredient not found".into()))?;

        Ingredient::try_from(row)
    }

    async fn delete(&self, id: IngredientId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("ingredient not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, title FROM tags ORDER BY title")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let ids: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, title FROM tags WHERE id = ANY($1) ORDER BY title",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
