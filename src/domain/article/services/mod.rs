// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, CategoryId};
use crate::domain::category::CategoryRepository;
use crate::domain::errors::{DomainError, DomainResult};

/// Cross-record validation rules for articles.
///
/// Field-level rules (required title and slug) are enforced by the value
/// objects; this service covers what needs storage lookups.
pub struct ArticleValidator {
    read_repo: Arc<dyn ArticleReadRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ArticleValidator {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            categories,
        }
    }

    /// Fails when another article already owns `slug`. `ignore_id` is the
    /// record being updated.
    pub async fn ensure_unique_slug(
        &self,
        slug: &ArticleSlug,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) == ignore_id => Ok(()),
            Some(_) => {
                tracing::warn!(slug = %slug, "rejected duplicate article slug");
                Err(DomainError::Validation("slug has already been taken".into()))
            }
            None => Ok(()),
        }
    }

    pub async fn ensure_category_exists(&self, category_id: Option<CategoryId>) -> DomainResult<()> {
        let Some(id) = category_id else {
            return Ok(());
        };
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::Validation(format!(
                "category {} does not exist",
                id.0
            ))),
        }
    }
}
