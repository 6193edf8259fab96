use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::article::ArticleReadRepository;
use crate::domain::attachment::AttachmentStore;
use crate::domain::category::CategoryRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) attachments: Arc<dyn AttachmentStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        attachments: Arc<dyn AttachmentStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            categories,
            attachments,
            clock,
        }
    }
}
