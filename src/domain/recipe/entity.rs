// src/domain/recipe/entity.rs
use crate::domain::ownership::Authored;
use crate::domain::recipe::value_objects::{
    IngredientId, IngredientQuantity, IngredientTitle, RecipeDescription, RecipeId, RecipeSlug,
    RecipeTitle, TagId, TagTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub title: TagTitle,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: RecipeTitle,
    pub slug: RecipeSlug,
    pub description: RecipeDescription,
    pub author_id: UserId,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn has_tag(&self, title: &TagTitle) -> bool {
        self.tags.iter().any(|tag| &tag.title == title)
    }

    pub fn tag_ids(&self) -> Vec<TagId> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

impl Authored for Recipe {
    fn author_id(&self) -> UserId {
        self.author_id
    }
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: RecipeTitle,
    pub slug: RecipeSlug,
    pub description: RecipeDescription,
    pub author_id: UserId,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable fields; the slug stays fixed and the
/// tag set is replaced as a whole.
#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub id: RecipeId,
    pub title: RecipeTitle,
    pub description: RecipeDescription,
    pub tag_ids: Vec<TagId>,
    pub updated_at: DateTime<Utc>,
}

/// Listing filter. Every set field narrows the result.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author_id: Option<UserId>,
    pub tag: Option<TagTitle>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.author_id.is_none_or(|id| recipe.author_id == id)
            && self.tag.as_ref().is_none_or(|tag| recipe.has_tag(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub recipe_id: RecipeId,
    pub title: IngredientTitle,
    pub quantity: Option<IngredientQuantity>,
    pub is_active: bool,
}

impl Ingredient {
    pub fn belongs_to(&self, recipe: &Recipe) -> bool {
        self.recipe_id == recipe.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientVisibility {
    All,
    ActiveOnly,
}

impl IngredientVisibility {
    pub fn admits(self, ingredient: &Ingredient) -> bool {
        match self {
            Self::All => true,
            Self::ActiveOnly => ingredient.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub recipe_id: RecipeId,
    pub title: IngredientTitle,
    pub quantity: Option<IngredientQuantity>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct IngredientUpdate {
    pub id: IngredientId,
    pub title: IngredientTitle,
    pub quantity: Option<IngredientQuantity>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: i64, title: &str) -> Tag {
        Tag {
            id: TagId::new(id).unwrap(),
            title: TagTitle::new(title).unwrap(),
        }
    }

    fn recipe(author: i64, tags: Vec<Tag>) -> Recipe {
        Recipe {
            id: RecipeId::new(1).unwrap(),
            title: RecipeTitle::new("Soup").unwrap(),
            slug: RecipeSlug::new("soup").unwrap(),
            description: RecipeDescription::default(),
            author_id: UserId::new(author).unwrap(),
            tags,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn filter_narrows_by_author_and_tag() {
        let soup = recipe(1, vec![tag(1, "vegan"), tag(2, "quick")]);

        assert!(RecipeFilter::default().matches(&soup));
        assert!(
            RecipeFilter {
                author_id: Some(UserId::new(1).unwrap()),
                tag: Some(TagTitle::new("quick").unwrap()),
            }
            .matches(&soup)
        );
        assert!(
            !RecipeFilter {
                author_id: None,
                tag: Some(TagTitle::new("dessert").unwrap()),
            }
            .matches(&soup)
        );
        assert!(
            !RecipeFilter {
                author_id: Some(UserId::new(2).unwrap()),
                tag: None,
            }
            .matches(&soup)
        );
    }

    #[test]
    fn visibility_hides_inactive_ingredients() {
        let salt = Ingredient {
            id: IngredientId::new(1).unwrap(),
            recipe_id: RecipeId::new(1).unwrap(),
            title: IngredientTitle::new("salt").unwrap(),
            quantity: None,
            is_active: false,
        };
        assert!(IngredientVisibility::All.admits(&salt));
        assert!(!IngredientVisibility::ActiveOnly.admits(&salt));
        assert!(salt.belongs_to(&recipe(1, vec![])));
    }
}
