use std::collections::HashMap;

use async_trait::async_trait;
use good_news::domain::article::{ArticleId, CategoryId};
use good_news::domain::attachment::{AttachmentField, AttachmentStore, FileAttachment};
use good_news::domain::category::{Category, CategoryRepository};
use good_news::domain::errors::DomainResult;

#[derive(Default)]
pub struct InMemoryCategoryRepo {
    categories: HashMap<i64, Category>,
}

impl InMemoryCategoryRepo {
    pub fn with(ids: &[i64]) -> Self {
        let categories = ids
            .iter()
            .map(|&id| {
                (
                    id,
                    Category {
                        id: CategoryId::new(id).unwrap(),
                        name: format!("Category {id}"),
                        slug: format!("category-{id}"),
                    },
                )
            })
            .collect();
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.get(&id.0).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAttachmentStore {
    files: Vec<FileAttachment>,
}

impl InMemoryAttachmentStore {
    pub fn with_files(files: Vec<FileAttachment>) -> Self {
        Self { files }
    }

    fn for_field(&self, article_id: ArticleId, field: AttachmentField) -> Vec<FileAttachment> {
        let mut files: Vec<_> = self
            .files
            .iter()
            .filter(|f| f.article_id == article_id && f.field == field)
            .cloned()
            .collect();
        files.sort_by_key(|f| (f.sort_order, f.id));
        files
    }
}

#[async_trait]
impl AttachmentStore for InMemoryAttachmentStore {
    async fn preview_image(&self, article_id: ArticleId) -> DomainResult<Option<FileAttachment>> {
        Ok(self
            .for_field(article_id, AttachmentField::PreviewImage)
            .into_iter()
            .next())
    }

    async fn images(&self, article_id: ArticleId) -> DomainResult<Vec<FileAttachment>> {
        Ok(self.for_field(article_id, AttachmentField::Images))
    }
}

pub fn file(id: i64, article_id: i64, field: AttachmentField, sort_order: i32) -> FileAttachment {
    FileAttachment {
        id,
        article_id: ArticleId::new(article_id).unwrap(),
        field,
        disk_name: format!("{id:08}.jpg"),
        file_name: format!("image-{id}.jpg"),
        file_size: 1024,
        content_type: "image/jpeg".into(),
        title: None,
        description: None,
        sort_order,
    }
}
