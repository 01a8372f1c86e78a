// src/application/commands/delete_article.rs
use crate::domain::article::repository::DeleteError;
use crate::domain::article::{ArticleRepository, Slug};
use crate::domain::errors::ValidationError;
use crate::domain::validated::NonEmptyList;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteArticleError {
    #[error("slug validation failed")]
    ValidationErrors { errors: NonEmptyList<ValidationError> },
    #[error("article not found: {slug}")]
    NotFoundArticleBySlug { slug: Slug },
}

pub struct DeleteArticleUseCase {
    repository: Arc<dyn ArticleRepository>,
}

impl DeleteArticleUseCase {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, slug: Option<&str>) -> Result<(), DeleteArticleError> {
        let slug = Slug::new(slug)
            .map_errors(ValidationError::from)
            .into_result()
            .map_err(|errors| DeleteArticleError::ValidationErrors { errors })?;

        self.repository
            .delete(&slug)
            .await
            .map_err(|DeleteError::NotFound { slug }| DeleteArticleError::NotFoundArticleBySlug {
                slug,
            })
    }
}
