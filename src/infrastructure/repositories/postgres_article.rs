// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleStatus,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, CategoryId, NewArticle, ViewCount,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, status_id, category_id, title, slug, preview_text, content, \
     published_start, published_stop, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    status_id: i32,
    category_id: Option<i64>,
    title: String,
    slug: String,
    preview_text: Option<String>,
    content: Option<String>,
    published_start: Option<DateTime<Utc>>,
    published_stop: Option<DateTime<Utc>>,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            status: ArticleStatus::from_id(row.status_id)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            preview_text: row.preview_text,
            content: row.content,
            published_start: row.published_start,
            published_stop: row.published_stop,
            view_count: ViewCount::new(row.view_count)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            status,
            category_id,
            title,
            slug,
            preview_text,
            content,
            published_start,
            published_stop,
            view_count,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO lovata_good_news_articles
                (status_id, category_id, title, slug, preview_text, content,
                 published_start, published_stop, view_count, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(status.id())
            .bind(category_id.map(i64::from))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(preview_text)
            .bind(content)
            .bind(published_start)
            .bind(published_stop)
            .bind(i64::from(view_count))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            status,
            category_id,
            title,
            slug,
            preview_text,
            content,
            published_start,
            published_stop,
            view_count,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE lovata_good_news_articles SET
                status_id = $2, category_id = $3, title = $4, slug = $5,
                preview_text = $6, content = $7, published_start = $8,
                published_stop = $9, view_count = $10, updated_at = $11
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .bind(status.id())
            .bind(category_id.map(i64::from))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(preview_text)
            .bind(content)
            .bind(published_start)
            .bind(published_stop)
            .bind(i64::from(view_count))
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM lovata_good_news_articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE lovata_good_news_articles SET view_count = view_count + 1
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

impl PostgresArticleReadRepository {
    /// Mirrors [`ArticleFilter::matches`] as SQL; keep the two in step.
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
        let mut has_where = false;
        let mut next_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(status) = filter.status {
            next_clause(builder);
            builder.push("status_id = ");
            builder.push_bind(status.id());
        }

        if !filter.status_in.is_empty() {
            let ids: Vec<i32> = filter.status_in.iter().map(|s| s.id()).collect();
            next_clause(builder);
            builder.push("status_id = ANY(");
            builder.push_bind(ids);
            builder.push(")");
        }

        if let Some(category_id) = filter.category_id {
            next_clause(builder);
            builder.push("category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(now) = filter.published_at {
            next_clause(builder);
            builder.push("published_start <= ");
            builder.push_bind(now);
            builder.push(" AND (published_stop IS NULL OR published_stop > ");
            builder.push_bind(now);
            builder.push(")");
        }

        if let Some(now) = filter.start_after {
            next_clause(builder);
            builder.push("published_start > ");
            builder.push_bind(now);
        }

        if let Some(now) = filter.stop_after {
            next_clause(builder);
            builder.push("published_stop > ");
            builder.push_bind(now);
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM lovata_good_news_articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql =
            format!("SELECT {ARTICLE_COLUMNS} FROM lovata_good_news_articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM lovata_good_news_articles"
        ));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY published_start DESC NULLS LAST, id DESC");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
