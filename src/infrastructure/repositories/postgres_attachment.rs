// src/infrastructure/repositories/postgres_attachment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::attachment::{AttachmentField, AttachmentStore, FileAttachment};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Polymorphic owner key the host file table uses for articles.
pub const ARTICLE_ATTACHMENT_TYPE: &str = "Lovata\\GoodNews\\Models\\Article";

#[derive(Clone)]
pub struct PostgresAttachmentStore {
    pool: PgPool,
}

impl PostgresAttachmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(
        &self,
        article_id: ArticleId,
        field: AttachmentField,
    ) -> DomainResult<Vec<FileAttachment>> {
        let rows = sqlx::query_as::<_, FileRow>(
            "SELECT id, attachment_id, field, disk_name, file_name, file_size, content_type,
                    title, description, sort_order
             FROM system_files
             WHERE attachment_type = $1 AND attachment_id = $2 AND field = $3
             ORDER BY sort_order ASC, id ASC",
        )
        .bind(ARTICLE_ATTACHMENT_TYPE)
        .bind(i64::from(article_id))
        .bind(field.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(FileAttachment::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[derive(Debug, FromRow)]
struct FileRow {
    id: i64,
    attachment_id: i64,
    field: String,
    disk_name: String,
    file_name: String,
    file_size: i64,
    content_type: String,
    title: Option<String>,
    description: Option<String>,
    sort_order: i32,
}

impl TryFrom<FileRow> for FileAttachment {
    type Error = DomainError;

    fn try_from(row: FileRow) -> Result<Self, Self::Error> {
        let field = match row.field.as_str() {
            "preview_image" => AttachmentField::PreviewImage,
            "images" => AttachmentField::Images,
            other => {
                return Err(DomainError::Persistence(format!(
                    "unexpected attachment field {other}"
                )));
            }
        };

        Ok(FileAttachment {
            id: row.id,
            article_id: ArticleId::new(row.attachment_id)?,
            field,
            disk_name: row.disk_name,
            file_name: row.file_name,
            file_size: row.file_size,
            content_type: row.content_type,
            title: row.title,
            description: row.description,
            sort_order: row.sort_order,
        })
    }
}

#[async_trait]
impl AttachmentStore for PostgresAttachmentStore {
    async fn preview_image(&self, article_id: ArticleId) -> DomainResult<Option<FileAttachment>> {
        let files = self.fetch(article_id, AttachmentField::PreviewImage).await?;
        if files.len() > 1 {
            tracing::warn!(article_id = %article_id, count = files.len(), "multiple preview images attached");
        }
        // attach-one keeps the first by sort order
        Ok(files.into_iter().next())
    }

    async fn images(&self, article_id: ArticleId) -> DomainResult<Vec<FileAttachment>> {
        self.fetch(article_id, AttachmentField::Images).await
    }
}
