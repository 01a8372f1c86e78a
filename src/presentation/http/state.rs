// src/presentation/http/state.rs
use crate::application::commands::{CreateArticleUseCase, DeleteArticleUseCase};
use crate::application::queries::{FeedArticlesUseCase, ShowArticleUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub create_article: Arc<CreateArticleUseCase>,
    pub show_article: Arc<ShowArticleUseCase>,
    pub feed_articles: Arc<FeedArticlesUseCase>,
    pub delete_article: Arc<DeleteArticleUseCase>,
}
