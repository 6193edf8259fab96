use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::specifications::ArticleFilter;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Atomically bumps `view_count` and returns the new row.
    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Matching rows ordered by `published_start DESC NULLS LAST, id DESC`.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
}
