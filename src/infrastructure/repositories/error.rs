use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_RECIPE_SLUG: &str = "recipes_slug_key";
const CNT_TAG_TITLE: &str = "tags_title_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_RECIPE_AUTHOR: &str = "recipes_author_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG | CNT_RECIPE_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_TAG_TITLE => DomainError::Conflict("tag already exists".into()),
                    CNT_ARTICLE_AUTHOR | CNT_RECIPE_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
