// src/application/queries/feed_articles.rs
use crate::domain::article::{ArticleRepository, CreatedArticle};
use std::sync::Arc;
use thiserror::Error;

/// Feeding the whole article list cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedArticlesError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCreatedArticles {
    pub articles: Vec<CreatedArticle>,
    pub articles_count: usize,
}

pub struct FeedArticlesUseCase {
    repository: Arc<dyn ArticleRepository>,
}

impl FeedArticlesUseCase {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<FeedCreatedArticles, FeedArticlesError> {
        let articles = match self.repository.find().await {
            Ok(articles) => articles,
            // FindError is uninhabited; the branch cannot be reached.
            Err(never) => match never {},
        };
        let articles_count = articles.len();
        Ok(FeedCreatedArticles {
            articles,
            articles_count,
        })
    }
}
