use super::ArticleQueryService;
use crate::{application::dto::StatusOptionDto, domain::article::ArticleStatus};

impl ArticleQueryService {
    pub fn status_options(&self) -> Vec<StatusOptionDto> {
        ArticleStatus::options()
            .into_iter()
            .map(StatusOptionDto::from)
            .collect()
    }
}
