// src/domain/article/specifications.rs
//! Query scopes over articles.
//!
//! Each scope exists as a free function over an in-memory collection and as a
//! clause of [`ArticleFilter`]. The free functions evaluate through
//! [`ArticleFilter::matches`]; SQL repositories translate the filter into a
//! `WHERE` clause that mirrors `matches`.
use chrono::{DateTime, Utc};

use crate::domain::article::entity::Article;
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::CategoryId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub status_in: Vec<ArticleStatus>,
    pub category_id: Option<CategoryId>,
    pub published_at: Option<DateTime<Utc>>,
    pub start_after: Option<DateTime<Utc>>,
    pub stop_after: Option<DateTime<Utc>>,
}

impl ArticleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent status leaves the filter unchanged.
    pub fn by_status(mut self, status: Option<ArticleStatus>) -> Self {
        if status.is_some() {
            self.status = status;
        }
        self
    }

    /// Empty set leaves the filter unchanged.
    pub fn by_status_in(mut self, statuses: impl IntoIterator<Item = ArticleStatus>) -> Self {
        let statuses: Vec<_> = statuses.into_iter().collect();
        if !statuses.is_empty() {
            self.status_in = statuses;
        }
        self
    }

    pub fn by_category(mut self, category_id: Option<CategoryId>) -> Self {
        if category_id.is_some() {
            self.category_id = category_id;
        }
        self
    }

    pub fn published(mut self, now: DateTime<Utc>) -> Self {
        self.published_at = Some(now);
        self
    }

    pub fn start_after(mut self, now: DateTime<Utc>) -> Self {
        self.start_after = Some(now);
        self
    }

    pub fn stop_after(mut self, now: DateTime<Utc>) -> Self {
        self.stop_after = Some(now);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        if self.status.is_some_and(|status| article.status != status) {
            return false;
        }
        if !self.status_in.is_empty() && !self.status_in.contains(&article.status) {
            return false;
        }
        if self
            .category_id
            .is_some_and(|category| article.category_id != Some(category))
        {
            return false;
        }
        if self.published_at.is_some_and(|now| !article.is_live_at(now)) {
            return false;
        }
        if let Some(now) = self.start_after {
            if !article.published_start.is_some_and(|start| start > now) {
                return false;
            }
        }
        if let Some(now) = self.stop_after {
            if !article.published_stop.is_some_and(|stop| stop > now) {
                return false;
            }
        }
        true
    }

    /// Keeps matching articles in their original order.
    pub fn apply(&self, articles: impl IntoIterator<Item = Article>) -> Vec<Article> {
        articles
            .into_iter()
            .filter(|article| self.matches(article))
            .collect()
    }
}

pub fn filter_by_status(
    articles: impl IntoIterator<Item = Article>,
    status: Option<ArticleStatus>,
) -> Vec<Article> {
    ArticleFilter::new().by_status(status).apply(articles)
}

pub fn filter_by_status_in(
    articles: impl IntoIterator<Item = Article>,
    statuses: &[ArticleStatus],
) -> Vec<Article> {
    ArticleFilter::new()
        .by_status_in(statuses.iter().copied())
        .apply(articles)
}

pub fn filter_by_category(
    articles: impl IntoIterator<Item = Article>,
    category_id: Option<CategoryId>,
) -> Vec<Article> {
    ArticleFilter::new().by_category(category_id).apply(articles)
}

pub fn filter_published(
    articles: impl IntoIterator<Item = Article>,
    now: DateTime<Utc>,
) -> Vec<Article> {
    ArticleFilter::new().published(now).apply(articles)
}

/// Scheduled articles whose window has not opened yet.
pub fn filter_start_after(
    articles: impl IntoIterator<Item = Article>,
    now: DateTime<Utc>,
) -> Vec<Article> {
    ArticleFilter::new().start_after(now).apply(articles)
}

/// Articles with an explicit stop still in the future. Open-ended ones are
/// excluded.
pub fn filter_stop_after(
    articles: impl IntoIterator<Item = Article>,
    now: DateTime<Utc>,
) -> Vec<Article> {
    ArticleFilter::new().stop_after(now).apply(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle, ViewCount};
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    fn article(id: i64, status: ArticleStatus) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            status,
            category_id: None,
            title: ArticleTitle::new(format!("Article {id}")).unwrap(),
            slug: ArticleSlug::new(format!("article-{id}")).unwrap(),
            preview_text: None,
            content: None,
            published_start: None,
            published_stop: None,
            view_count: ViewCount::default(),
            created_at: at(0, 0),
            updated_at: at(0, 0),
        }
    }

    fn windowed(
        id: i64,
        start: Option<DateTime<Utc>>,
        stop: Option<DateTime<Utc>>,
    ) -> Article {
        let mut a = article(id, ArticleStatus::Published);
        a.published_start = start;
        a.published_stop = stop;
        a
    }

    fn ids(articles: &[Article]) -> Vec<i64> {
        articles.iter().map(|a| a.id.0).collect()
    }

    #[test]
    fn status_scope_without_value_is_noop() {
        let input = vec![
            article(1, ArticleStatus::New),
            article(2, ArticleStatus::Review),
        ];
        assert_eq!(ids(&filter_by_status(input, None)), vec![1, 2]);
    }

    #[test]
    fn status_scope_keeps_exact_matches() {
        let input = vec![
            article(1, ArticleStatus::New),
            article(2, ArticleStatus::Review),
            article(3, ArticleStatus::New),
        ];
        let out = filter_by_status(input, Some(ArticleStatus::New));
        assert_eq!(ids(&out), vec![1, 3]);
    }

    #[test]
    fn status_in_scope() {
        let input = vec![
            article(1, ArticleStatus::New),
            article(2, ArticleStatus::InWork),
            article(3, ArticleStatus::Published),
        ];
        let out = filter_by_status_in(
            input.clone(),
            &[ArticleStatus::InWork, ArticleStatus::Published],
        );
        assert_eq!(ids(&out), vec![2, 3]);
        assert_eq!(ids(&filter_by_status_in(input, &[])), vec![1, 2, 3]);
    }

    #[test]
    fn published_scope_honours_window() {
        let input = vec![windowed(1, Some(at(10, 0)), Some(at(12, 0)))];
        assert_eq!(ids(&filter_published(input.clone(), at(11, 0))), vec![1]);
        assert!(filter_published(input.clone(), at(13, 0)).is_empty());
        assert!(filter_published(input, at(9, 0)).is_empty());
    }

    #[test]
    fn published_scope_with_open_end() {
        let input = vec![windowed(1, Some(at(10, 0)), None)];
        assert_eq!(ids(&filter_published(input, at(23, 59))), vec![1]);
    }

    #[test]
    fn published_scope_excludes_missing_start() {
        let input = vec![windowed(1, None, None)];
        assert!(filter_published(input, at(11, 0)).is_empty());
    }

    #[test]
    fn start_after_scope_returns_scheduled() {
        let input = vec![
            windowed(1, Some(at(10, 0)), None),
            windowed(2, Some(at(14, 0)), None),
            windowed(3, None, None),
        ];
        assert_eq!(ids(&filter_start_after(input, at(11, 0))), vec![2]);
    }

    #[test]
    fn stop_after_scope_skips_open_ended() {
        let input = vec![
            windowed(1, Some(at(10, 0)), Some(at(12, 0))),
            windowed(2, Some(at(10, 0)), Some(at(9, 0))),
            windowed(3, Some(at(10, 0)), None),
        ];
        assert_eq!(ids(&filter_stop_after(input, at(11, 0))), vec![1]);
    }

    #[test]
    fn category_scope() {
        let mut first = article(1, ArticleStatus::New);
        first.category_id = Some(CategoryId::new(5).unwrap());
        let second = article(2, ArticleStatus::New);
        let out = filter_by_category(vec![first, second], Some(CategoryId::new(5).unwrap()));
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn scopes_compose() {
        let filter = ArticleFilter::new()
            .by_status(Some(ArticleStatus::Published))
            .published(at(11, 0));
        let mut draft = windowed(2, Some(at(10, 0)), None);
        draft.status = ArticleStatus::Review;
        let input = vec![windowed(1, Some(at(10, 0)), None), draft];
        assert_eq!(ids(&filter.apply(input)), vec![1]);
        assert_eq!(ArticleFilter::new().by_status(None), ArticleFilter::default());
    }
}
