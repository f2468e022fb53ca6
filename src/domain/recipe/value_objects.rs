// src/domain/recipe/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::is_valid_slug;
use std::fmt;

pub const TITLE_MAX_LEN: usize = 200;
pub const QUANTITY_MAX_LEN: usize = 64;

macro_rules! positive_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_id!(RecipeId, "recipe");
positive_id!(IngredientId, "ingredient");
positive_id!(TagId, "tag");

fn bounded_title(value: String, what: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{what} cannot be empty")));
    }
    if value.chars().count() > TITLE_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "{what} must be at most {TITLE_MAX_LEN} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTitle(String);

impl RecipeTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_title(value.into(), "title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecipeTitle> for String {
    fn from(value: RecipeTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSlug(String);

impl RecipeSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!("invalid slug '{value}'")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecipeSlug> for String {
    fn from(value: RecipeSlug) -> Self {
        value.0
    }
}

/// Free text; may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDescription(String);

impl RecipeDescription {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RecipeDescription> for String {
    fn from(value: RecipeDescription) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientTitle(String);

impl IngredientTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_title(value.into(), "ingredient title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IngredientTitle> for String {
    fn from(value: IngredientTitle) -> Self {
        value.0
    }
}

/// e.g. "200 g", "2 tbsp".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuantity(String);

impl IngredientQuantity {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_owned();
        if value.is_empty() {
            return Err(DomainError::Validation("quantity cannot be empty".into()));
        }
        if value.chars().count() > QUANTITY_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "quantity must be at most {QUANTITY_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<IngredientQuantity> for String {
    fn from(value: IngredientQuantity) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagTitle(String);

impl TagTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_owned();
        if value.is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagTitle> for String {
    fn from(value: TagTitle) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_non_positive() {
        assert!(RecipeId::new(0).is_err());
        assert!(IngredientId::new(-4).is_err());
        assert_eq!(i64::from(TagId::new(9).unwrap()), 9);
    }

    #[test]
    fn description_is_trimmed() {
        assert_eq!(RecipeDescription::new("  stir well \n").as_str(), "stir well");
    }

    #[test]
    fn quantity_and_tag_require_text() {
        assert!(IngredientQuantity::new("  ").is_err());
        assert_eq!(IngredientQuantity::new(" 2 tbsp ").unwrap().as_str(), "2 tbsp");
        assert!(TagTitle::new("").is_err());
    }
}
