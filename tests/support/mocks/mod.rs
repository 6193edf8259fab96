pub mod article_repos;
pub mod relations;
pub mod time;

pub use article_repos::InMemoryArticleRepo;
pub use relations::{InMemoryAttachmentStore, InMemoryCategoryRepo, file};
pub use time::{FixedClock, fixed_now};
