// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleValidator},
        attachment::AttachmentStore,
        category::CategoryRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        attachment_store: Arc<dyn AttachmentStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let validator = Arc::new(ArticleValidator::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&validator),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&attachment_store),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
