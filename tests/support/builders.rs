// tests/support/builders.rs
use chrono::{DateTime, Utc};

use good_news::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    status: ArticleStatus,
    category_id: Option<i64>,
    title: String,
    slug: String,
    start: Option<DateTime<Utc>>,
    stop: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            status: ArticleStatus::New,
            category_id: None,
            title: format!("Article {id}"),
            slug: format!("article-{id}"),
            start: None,
            stop: None,
        }
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn category(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn window(mut self, start: Option<DateTime<Utc>>, stop: Option<DateTime<Utc>>) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            status: self.status,
            category_id: self.category_id.map(|id| CategoryId::new(id).unwrap()),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            preview_text: None,
            content: None,
            published_start: self.start,
            published_stop: self.stop,
            view_count: ViewCount::default(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
