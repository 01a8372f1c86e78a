// src/application/queries/show_article.rs
use crate::domain::article::repository::FindBySlugError;
use crate::domain::article::{ArticleRepository, CreatedArticle, Slug};
use crate::domain::errors::ValidationError;
use crate::domain::validated::NonEmptyList;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowArticleError {
    #[error("slug validation failed")]
    ValidationErrors { errors: NonEmptyList<ValidationError> },
    #[error("article not found: {slug}")]
    NotFoundArticleBySlug { slug: Slug },
}

pub struct ShowArticleUseCase {
    repository: Arc<dyn ArticleRepository>,
}

impl ShowArticleUseCase {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, slug: Option<&str>) -> Result<CreatedArticle, ShowArticleError> {
        let slug = Slug::new(slug)
            .map_errors(ValidationError::from)
            .into_result()
            .map_err(|errors| ShowArticleError::ValidationErrors { errors })?;

        self.repository.find_by_slug(&slug).await.map_err(
            |FindBySlugError::NotFound { slug }| ShowArticleError::NotFoundArticleBySlug { slug },
        )
    }
}
