// src/application/commands/create_article.rs
use crate::domain::article::{ArticleRepository, CreatedArticle};
use crate::domain::errors::ValidationError;
use crate::domain::validated::NonEmptyList;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateArticleError {
    #[error("article validation failed")]
    InvalidArticle { errors: NonEmptyList<ValidationError> },
}

pub struct CreateArticleUseCase {
    repository: Arc<dyn ArticleRepository>,
}

impl CreateArticleUseCase {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Validates the raw fields (accumulating every violation) and persists
    /// the resulting article.
    pub async fn execute(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        body: Option<&str>,
    ) -> Result<CreatedArticle, CreateArticleError> {
        let article = CreatedArticle::new(title, description, body)
            .into_result()
            .map_err(|errors| CreateArticleError::InvalidArticle { errors })?;

        let created = match self.repository.create(&article).await {
            Ok(created) => created,
            // CreateError is uninhabited; the branch cannot be reached.
            Err(never) => match never {},
        };
        Ok(created)
    }
}
