// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::is_valid_slug;
use std::fmt;

pub const TITLE_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
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

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

/// Reference to an article image: a site-relative path or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleImage(String);

impl ArticleImage {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let acceptable = (value.starts_with('/') && !value.starts_with("//"))
            || value.starts_with("http://")
            || value.starts_with("https://");
        if !acceptable || value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "image must be a site path or an http(s) URL".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleImage> for String {
    fn from(value: ArticleImage) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_reference_shapes() {
        assert!(ArticleImage::new("/media/cake.png").is_ok());
        assert!(ArticleImage::new("https://cdn.example.com/cake.png").is_ok());
        assert!(ArticleImage::new("//evil.example.com/x.png").is_err());
        assert!(ArticleImage::new("cake.png").is_err());
        assert!(ArticleImage::new("/media/a b.png").is_err());
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(ArticleTitle::new("a".repeat(TITLE_MAX_LEN)).is_ok());
        assert!(ArticleTitle::new("a".repeat(TITLE_MAX_LEN + 1)).is_err());
    }
}
