// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use good_news::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use good_news::domain::errors::{DomainError, DomainResult};

/// Article store backing both repository traits, with the slug unique
/// constraint of the real table.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Article>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.inner.lock().unwrap();
            for article in articles {
                state.next_id = state.next_id.max(article.id.0);
                state.rows.insert(article.id.0, article);
            }
        }
        repo
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

fn slug_taken(state: &State, slug: &ArticleSlug, except: Option<i64>) -> bool {
    state
        .rows
        .values()
        .any(|a| &a.slug == slug && Some(a.id.0) != except)
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        if slug_taken(&state, &new.slug, None) {
            return Err(DomainError::Validation("slug has already been taken".into()));
        }
        state.next_id += 1;
        let article = Article {
            id: ArticleId::new(state.next_id)?,
            status: new.status,
            category_id: new.category_id,
            title: new.title,
            slug: new.slug,
            preview_text: new.preview_text,
            content: new.content,
            published_start: new.published_start,
            published_stop: new.published_stop,
            view_count: new.view_count,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.rows.insert(article.id.0, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        if slug_taken(&state, &update.slug, Some(update.id.0)) {
            return Err(DomainError::Validation("slug has already been taken".into()));
        }
        let row = state
            .rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.status = update.status;
        row.category_id = update.category_id;
        row.title = update.title;
        row.slug = update.slug;
        row.preview_text = update.preview_text;
        row.content = update.content;
        row.published_start = update.published_start;
        row.published_stop = update.published_stop;
        row.view_count = update.view_count;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        let row = state
            .rows
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.view_count = row.view_count.incremented();
        Ok(row.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id.0))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state.rows.values().find(|a| &a.slug == slug).cloned())
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let state = self.inner.lock().unwrap();
        let mut articles = filter.apply(state.rows.values().cloned());
        // published_start DESC NULLS LAST, id DESC
        articles.sort_by(|a, b| {
            b.published_start
                .is_some()
                .cmp(&a.published_start.is_some())
                .then(b.published_start.cmp(&a.published_start))
                .then(b.id.cmp(&a.id))
        });
        Ok(articles)
    }
}
