// src/application/forms/article.rs
use super::{FormErrors, clean_title, domain_rule, optional, required};
use crate::domain::article::{ArticleContent, ArticleImage, ArticleTitle};

#[derive(Debug, Clone, Default)]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub image: Option<ArticleImage>,
}

impl ArticleForm {
    pub fn validate(&self) -> Result<ValidArticle, FormErrors> {
        let mut errors = FormErrors::new();

        let title = errors
            .check("title", clean_title(&self.title))
            .and_then(|title| errors.check("title", domain_rule(ArticleTitle::new(title))));
        let content = errors
            .check("content", required(&self.content))
            .and_then(|content| errors.check("content", domain_rule(ArticleContent::new(content))));
        let image = match optional(self.image.as_deref()) {
            Some(raw) => errors.check("image", domain_rule(ArticleImage::new(raw))).map(Some),
            None => Some(None),
        };

        match (title, content, image) {
            (Some(title), Some(content), Some(image)) if errors.is_empty() => Ok(ValidArticle {
                title,
                content,
                image,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::{REQUIRED, TITLE_NOT_ALPHANUMERIC};

    fn form(title: &str, content: &str, image: Option<&str>) -> ArticleForm {
        ArticleForm {
            title: title.into(),
            content: content.into(),
            image: image.map(Into::into),
        }
    }

    #[test]
    fn valid_article_form() {
        let valid = form("Spring menu", "Fresh peas", Some(" /media/peas.jpg "))
            .validate()
            .unwrap();
        assert_eq!(valid.title.as_str(), "Spring menu");
        assert_eq!(valid.image.unwrap().as_str(), "/media/peas.jpg");
    }

    #[test]
    fn blank_image_is_absent() {
        let valid = form("Menu", "text", Some("   ")).validate().unwrap();
        assert!(valid.image.is_none());
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let errors = form("Menu!", "", Some("peas.jpg")).validate().unwrap_err();
        assert_eq!(errors.field("title"), [TITLE_NOT_ALPHANUMERIC.to_string()]);
        assert_eq!(errors.field("content"), [REQUIRED.to_string()]);
        assert_eq!(errors.field("image").len(), 1);
    }
}
