use crate::domain::article::{Article, ArticleStatus, StatusOption};
use crate::domain::attachment::FileAttachment;
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub status: ArticleStatus,
    pub status_id: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub preview_text: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, with = "serde_time::option")]
    pub published_start: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub published_stop: Option<DateTime<Utc>>,
    pub view_count: u64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            status: article.status,
            status_id: article.status.id(),
            category_id: article.category_id.map(Into::into),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            preview_text: article.preview_text,
            content: article.content,
            published_start: article.published_start,
            published_stop: article.published_stop,
            view_count: article.view_count.get(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
            slug: category.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAttachmentDto {
    pub id: i64,
    pub disk_name: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub sort_order: i32,
}

impl From<FileAttachment> for FileAttachmentDto {
    fn from(file: FileAttachment) -> Self {
        Self {
            id: file.id,
            disk_name: file.disk_name,
            file_name: file.file_name,
            file_size: file.file_size,
            content_type: file.content_type,
            title: file.title,
            description: file.description,
            sort_order: file.sort_order,
        }
    }
}

/// Article with its relations resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetailsDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub preview_image: Option<FileAttachmentDto>,
    #[serde(default)]
    pub images: Vec<FileAttachmentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOptionDto {
    pub id: i32,
    pub status: ArticleStatus,
    pub label: String,
}

impl From<StatusOption> for StatusOptionDto {
    fn from(option: StatusOption) -> Self {
        Self {
            id: option.status.id(),
            status: option.status,
            label: option.label.to_string(),
        }
    }
}
