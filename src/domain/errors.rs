// src/domain/errors.rs
use crate::domain::article::value_objects::{BodyError, DescriptionError, SlugError, TitleError};
use thiserror::Error;

/// Union over the per-field validation errors. Each field owns its closed
/// error set; this type exists so independently validated fields can share
/// one accumulated failure list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error(transparent)]
    Title(#[from] TitleError),
    #[error(transparent)]
    Description(#[from] DescriptionError),
    #[error(transparent)]
    Body(#[from] BodyError),
}
