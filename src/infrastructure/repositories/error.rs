use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "lovata_good_news_articles_slug_key";
const CNT_ARTICLE_CATEGORY: &str = "lovata_good_news_articles_category_id_fkey";
const CNT_ARTICLE_VIEW_COUNT: &str = "lovata_good_news_articles_view_count_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => {
                        DomainError::Validation("slug has already been taken".into())
                    }
                    CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_ARTICLE_VIEW_COUNT => {
                        DomainError::Validation("view count cannot be negative".into())
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
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
