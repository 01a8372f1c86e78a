// src/application/dto.rs
use crate::domain::article::CreatedArticle;
use serde::Serialize;

/// Flat representation of an article for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
}

impl From<CreatedArticle> for ArticleDto {
    fn from(article: CreatedArticle) -> Self {
        Self {
            slug: article.slug.into(),
            title: article.title.into(),
            description: article.description.into(),
            body: article.body.into(),
        }
    }
}
