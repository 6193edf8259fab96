// src/domain/article/entity.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{
    ArticleId, ArticleSlug, ArticleTitle, CategoryId, ViewCount,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub status: ArticleStatus,
    pub category_id: Option<CategoryId>,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub preview_text: Option<String>,
    pub content: Option<String>,
    pub published_start: Option<DateTime<Utc>>,
    pub published_stop: Option<DateTime<Utc>>,
    pub view_count: ViewCount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Pre-persist hook. Must run right before every storage write.
    pub fn before_save(&mut self, now: DateTime<Utc>) {
        stamp_publish_start(self.status, &mut self.published_start, now);
    }

    /// `start <= now < stop`, with an absent stop meaning open-ended.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        let started = self.published_start.is_some_and(|start| start <= now);
        let not_stopped = self.published_stop.is_none_or(|stop| stop > now);
        started && not_stopped
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub status: ArticleStatus,
    pub category_id: Option<CategoryId>,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub preview_text: Option<String>,
    pub content: Option<String>,
    pub published_start: Option<DateTime<Utc>>,
    pub published_stop: Option<DateTime<Utc>>,
    pub view_count: ViewCount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn before_save(&mut self, now: DateTime<Utc>) {
        stamp_publish_start(self.status, &mut self.published_start, now);
    }
}

fn stamp_publish_start(
    status: ArticleStatus,
    published_start: &mut Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) {
    if status == ArticleStatus::Published && published_start.is_none() {
        *published_start = Some(now);
    }
}

/// Full replacement of the mutable columns of an existing row.
///
/// Built from an [`Article`] after edits and `before_save` have been applied,
/// so the repository never has to merge partial state.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub status: ArticleStatus,
    pub category_id: Option<CategoryId>,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub preview_text: Option<String>,
    pub content: Option<String>,
    pub published_start: Option<DateTime<Utc>>,
    pub published_stop: Option<DateTime<Utc>>,
    pub view_count: ViewCount,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            status: article.status,
            category_id: article.category_id,
            title: article.title.clone(),
            slug: article.slug.clone(),
            preview_text: article.preview_text.clone(),
            content: article.content.clone(),
            published_start: article.published_start,
            published_stop: article.published_stop,
            view_count: article.view_count,
            updated_at: article.updated_at,
        }
    }
}
