// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleImage, ArticleSlug, ArticleTitle,
};
use crate::domain::ownership::Authored;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub image: Option<ArticleImage>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        content: ArticleContent,
        image: Option<ArticleImage>,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.content = content;
        self.image = image;
        self.updated_at = now;
    }
}

impl Authored for Article {
    fn author_id(&self) -> UserId {
        self.author_id
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub image: Option<ArticleImage>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable fields; the slug stays fixed.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub image: Option<ArticleImage>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            image: article.image.clone(),
            updated_at: article.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            content: ArticleContent::new("content").unwrap(),
            image: None,
            author_id: UserId::new(1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_content_updates_fields_and_keeps_slug() {
        let mut article = sample_article();
        let now = Utc::now() + chrono::Duration::seconds(5);
        let image = ArticleImage::new("/media/x.png").unwrap();
        article.set_content(
            ArticleTitle::new("new title").unwrap(),
            ArticleContent::new("new content").unwrap(),
            Some(image.clone()),
            now,
        );
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.content.as_str(), "new content");
        assert_eq!(article.image, Some(image));
        assert_eq!(article.slug.as_str(), "title");
        assert_eq!(article.updated_at, now);

        let update = ArticleUpdate::from(&article);
        assert_eq!(update.title.as_str(), "new title");
        assert_eq!(update.updated_at, now);
    }
}
