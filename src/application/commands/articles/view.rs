// src/application/commands/articles/view.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct RecordViewCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Counts one page view. Skips `before_save`, only the counter changes.
    pub async fn record_view(&self, command: RecordViewCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self.write_repo.increment_view_count(id).await?;
        tracing::debug!(article_id = %article.id, views = article.view_count.get(), "article view recorded");
        Ok(article.into())
    }
}
