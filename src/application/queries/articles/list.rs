use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleFilter, ArticleStatus, CategoryId},
};

/// Publish-window scope evaluated against the current clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishWindow {
    #[default]
    Any,
    /// Window currently open.
    Live,
    /// Start still in the future.
    Scheduled,
    /// Explicit stop still in the future.
    NotExpired,
}

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub status_id: Option<i32>,
    pub status_ids: Vec<i32>,
    pub category_id: Option<i64>,
    pub window: PublishWindow,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = self.build_filter(query)?;
        tracing::debug!(?filter, "listing articles");

        let records = self.read_repo.list(&filter).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    fn build_filter(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleFilter> {
        // status id 0 means "no status given"
        let status = query
            .status_id
            .filter(|&id| id != 0)
            .map(ArticleStatus::from_id)
            .transpose()?;
        let statuses = query
            .status_ids
            .into_iter()
            .filter(|&id| id != 0)
            .map(ArticleStatus::from_id)
            .collect::<Result<Vec<_>, _>>()?;
        let category_id = query.category_id.map(CategoryId::new).transpose()?;

        let filter = ArticleFilter::new()
            .by_status(status)
            .by_status_in(statuses)
            .by_category(category_id);

        let filter = match query.window {
            PublishWindow::Any => filter,
            PublishWindow::Live => filter.published(self.clock.now()),
            PublishWindow::Scheduled => filter.start_after(self.clock.now()),
            PublishWindow::NotExpired => filter.stop_after(self.clock.now()),
        };
        Ok(filter)
    }
}
