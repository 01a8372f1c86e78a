// src/domain/article/repository.rs
use crate::domain::article::entity::CreatedArticle;
use crate::domain::article::value_objects::Slug;
use async_trait::async_trait;
use thiserror::Error;

/// Listing has no failure mode; the empty enum proves it to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindBySlugError {
    #[error("article not found: {slug}")]
    NotFound { slug: Slug },
}

/// Insertion has no modeled failure mode either; anything that goes wrong
/// at the SQL level is a defect in the persistence collaborator, not an
/// outcome this contract describes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("article not found: {slug}")]
    NotFound { slug: Slug },
}

/// Durability contract for created articles. Implementations rehydrate rows
/// through the trusted (`new_without_validation`) factories only; persisted
/// data is assumed already valid.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find(&self) -> Result<Vec<CreatedArticle>, FindError>;

    async fn find_by_slug(&self, slug: &Slug) -> Result<CreatedArticle, FindBySlugError>;

    async fn create(&self, article: &CreatedArticle) -> Result<CreatedArticle, CreateError>;

    async fn delete(&self, slug: &Slug) -> Result<(), DeleteError>;
}
