// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{
        ArticleSlug, ArticleStatus, ArticleTitle, CategoryId, NewArticle, ViewCount,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub status_id: Option<i32>,
    pub category_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub preview_text: Option<String>,
    pub content: Option<String>,
    pub published_start: Option<DateTime<Utc>>,
    pub published_stop: Option<DateTime<Utc>>,
    pub view_count: i64,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    inner: CreateArticleCommand,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.inner.slug = slug.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.inner.status_id = Some(status.id());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.inner.category_id = Some(category_id);
        self
    }

    pub fn preview_text(mut self, text: impl Into<String>) -> Self {
        self.inner.preview_text = Some(text.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.inner.content = Some(content.into());
        self
    }

    pub fn published_start(mut self, start: DateTime<Utc>) -> Self {
        self.inner.published_start = Some(start);
        self
    }

    pub fn published_stop(mut self, stop: DateTime<Utc>) -> Self {
        self.inner.published_stop = Some(stop);
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        self.inner
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let slug = ArticleSlug::new(command.slug)?;
        let status = command
            .status_id
            .map(ArticleStatus::from_id)
            .transpose()?
            .unwrap_or_default();
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        let view_count = ViewCount::new(command.view_count)?;

        self.validator.ensure_unique_slug(&slug, None).await?;
        self.validator.ensure_category_exists(category_id).await?;

        let now = self.clock.now();
        let mut new_article = NewArticle {
            status,
            category_id,
            title,
            slug,
            preview_text: command.preview_text,
            content: command.content,
            published_start: command.published_start,
            published_stop: command.published_stop,
            view_count,
            created_at: now,
            updated_at: now,
        };
        new_article.before_save(now);

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, status = %created.status, "article created");
        Ok(created.into())
    }
}
