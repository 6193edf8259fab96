// src/domain/attachment.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::fmt;

/// Relation name an attachment is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentField {
    PreviewImage,
    Images,
}

impl AttachmentField {
    pub fn as_str(self) -> &'static str {
        match self {
            AttachmentField::PreviewImage => "preview_image",
            AttachmentField::Images => "images",
        }
    }
}

impl fmt::Display for AttachmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub id: i64,
    pub article_id: ArticleId,
    pub field: AttachmentField,
    pub disk_name: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

/// Read side of the host's file store. Files are uploaded and removed by the
/// host; articles only resolve what is attached to them.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn preview_image(&self, article_id: ArticleId) -> DomainResult<Option<FileAttachment>>;
    /// Ordered by `sort_order`, then id.
    async fn images(&self, article_id: ArticleId) -> DomainResult<Vec<FileAttachment>>;
}
