// src/application/forms/recipe.rs
use super::{FormErrors, clean_title, domain_rule, optional, required};
use crate::domain::recipe::{
    IngredientQuantity, IngredientTitle, RecipeDescription, RecipeTitle, TagId,
};

pub const INVALID_TAG_CHOICE: &str = "Select a valid choice.";

#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    /// Raw `tags` values; each must be a known tag id.
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ValidRecipe {
    pub title: RecipeTitle,
    pub description: RecipeDescription,
    pub tag_ids: Vec<TagId>,
}

impl RecipeForm {
    /// Checks field shapes. Whether each tag id exists is decided by the
    /// caller against the tag repository.
    pub fn validate(&self) -> Result<ValidRecipe, FormErrors> {
        let mut errors = FormErrors::new();

        let title = errors
            .check("title", clean_title(&self.title))
            .and_then(|title| errors.check("title", domain_rule(RecipeTitle::new(title))));

        let mut tag_ids: Vec<TagId> = Vec::with_capacity(self.tags.len());
        for raw in &self.tags {
            match raw.trim().parse::<i64>().ok().and_then(|id| TagId::new(id).ok()) {
                Some(id) if !tag_ids.contains(&id) => tag_ids.push(id),
                Some(_) => {}
                None => {
                    errors.add("tags", INVALID_TAG_CHOICE);
                    break;
                }
            }
        }

        match title {
            Some(title) if errors.is_empty() => Ok(ValidRecipe {
                title,
                description: RecipeDescription::new(self.description.as_str()),
                tag_ids,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngredientForm {
    pub title: String,
    pub quantity: Option<String>,
    pub is_active: bool,
}

impl Default for IngredientForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            quantity: None,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidIngredient {
    pub title: IngredientTitle,
    pub quantity: Option<IngredientQuantity>,
    pub is_active: bool,
}

impl IngredientForm {
    pub fn validate(&self) -> Result<ValidIngredient, FormErrors> {
        let mut errors = FormErrors::new();

        let title = errors
            .check("title", required(&self.title))
            .and_then(|title| errors.check("title", domain_rule(IngredientTitle::new(title))));
        let quantity = match optional(self.quantity.as_deref()) {
            Some(raw) => errors
                .check("quantity", domain_rule(IngredientQuantity::new(raw)))
                .map(Some),
            None => Some(None),
        };

        match (title, quantity) {
            (Some(title), Some(quantity)) if errors.is_empty() => Ok(ValidIngredient {
                title,
                quantity,
                is_active: self.is_active,
            }),
            _ => Err(errors),
        }
    }
}
