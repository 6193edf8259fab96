mod details;
mod get_by_id;
mod get_by_slug;
mod list;
mod service;
mod status_options;

pub use details::GetArticleDetailsQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ListArticlesQuery, PublishWindow};
pub use service::ArticleQueryService;
