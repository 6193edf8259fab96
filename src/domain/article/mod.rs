pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod status;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use specifications::ArticleFilter;
pub use status::{ArticleStatus, StatusOption};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle, CategoryId, ViewCount};
