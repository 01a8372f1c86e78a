// src/presentation/http/error.rs
use crate::application::commands::{CreateArticleError, DeleteArticleError};
use crate::application::queries::ShowArticleError;
use crate::domain::errors::ValidationError;
use crate::domain::validated::NonEmptyList;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `{ "errors": { "body": [...] } }`, one message per accumulated error.
#[derive(Debug, Serialize)]
pub struct GenericErrorModel {
    pub errors: GenericErrorModelErrors,
}

#[derive(Debug, Serialize)]
pub struct GenericErrorModelErrors {
    pub body: Vec<String>,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    messages: Vec<String>,
}

impl HttpError {
    fn new(status: StatusCode, messages: Vec<String>) -> Self {
        Self { status, messages }
    }

    fn unprocessable(errors: NonEmptyList<ValidationError>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            errors.into_iter().map(|err| err.to_string()).collect(),
        )
    }

    fn not_found(message: String) -> Self {
        Self::new(StatusCode::NOT_FOUND, vec![message])
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = GenericErrorModel {
            errors: GenericErrorModelErrors {
                body: self.messages,
            },
        };
        (self.status, Json(payload)).into_response()
    }
}

impl From<CreateArticleError> for HttpError {
    fn from(err: CreateArticleError) -> Self {
        match err {
            CreateArticleError::InvalidArticle { errors } => Self::unprocessable(errors),
        }
    }
}

impl From<ShowArticleError> for HttpError {
    fn from(err: ShowArticleError) -> Self {
        match err {
            ShowArticleError::ValidationErrors { errors } => Self::unprocessable(errors),
            ShowArticleError::NotFoundArticleBySlug { slug } => {
                Self::not_found(format!("article not found: {slug}"))
            }
        }
    }
}

impl From<DeleteArticleError> for HttpError {
    fn from(err: DeleteArticleError) -> Self {
        match err {
            DeleteArticleError::ValidationErrors { errors } => Self::unprocessable(errors),
            DeleteArticleError::NotFoundArticleBySlug { slug } => {
                Self::not_found(format!("article not found: {slug}"))
            }
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;
