// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate, CategoryId,
    },
};
use chrono::{DateTime, Utc};

/// Partial update. Outer `None` leaves a field untouched; for nullable
/// columns `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub status_id: Option<i32>,
    pub category_id: Option<Option<i64>>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub preview_text: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub published_start: Option<Option<DateTime<Utc>>>,
    pub published_stop: Option<Option<DateTime<Utc>>>,
}

impl UpdateArticleCommand {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.apply_changes(&mut article, command).await?;

        let now = self.clock.now();
        article.updated_at = now;
        article.before_save(now);

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(article_id = %updated.id, status = %updated.status, "article updated");
        Ok(updated.into())
    }

    async fn apply_changes(
        &self,
        article: &mut Article,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<()> {
        if let Some(title) = command.title {
            article.title = ArticleTitle::new(title)?;
        }

        if let Some(slug) = command.slug {
            let slug = ArticleSlug::new(slug)?;
            if slug != article.slug {
                self.validator
                    .ensure_unique_slug(&slug, Some(article.id))
                    .await?;
                article.slug = slug;
            }
        }

        if let Some(status_id) = command.status_id {
            article.status = ArticleStatus::from_id(status_id)?;
        }

        if let Some(category_id) = command.category_id {
            let category_id = category_id.map(CategoryId::new).transpose()?;
            self.validator.ensure_category_exists(category_id).await?;
            article.category_id = category_id;
        }

        if let Some(preview_text) = command.preview_text {
            article.preview_text = preview_text;
        }
        if let Some(content) = command.content {
            article.content = content;
        }
        if let Some(start) = command.published_start {
            article.published_start = start;
        }
        if let Some(stop) = command.published_stop {
            article.published_stop = stop;
        }

        Ok(())
    }
}
