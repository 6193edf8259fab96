use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailsDto, ArticleDto, CategoryDto, FileAttachmentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleDetailsQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Loads the article and resolves its category and attachments.
    ///
    /// A dangling `category_id` yields `category: None` rather than an error;
    /// the category may have been removed after the article was saved.
    pub async fn get_article_details(
        &self,
        query: GetArticleDetailsQuery,
    ) -> ApplicationResult<ArticleDetailsDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let category = match article.category_id {
            Some(category_id) => self.categories.find_by_id(category_id).await?,
            None => None,
        };
        if article.category_id.is_some() && category.is_none() {
            tracing::warn!(article_id = %article.id, "article references a missing category");
        }

        let preview_image = self.attachments.preview_image(article.id).await?;
        let images = self.attachments.images(article.id).await?;

        Ok(ArticleDetailsDto {
            article: ArticleDto::from(article),
            category: category.map(CategoryDto::from),
            preview_image: preview_image.map(FileAttachmentDto::from),
            images: images.into_iter().map(FileAttachmentDto::from).collect(),
        })
    }
}
