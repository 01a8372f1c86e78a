// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

use axum::Router;
use kawaraban::application::commands::{CreateArticleUseCase, DeleteArticleUseCase};
use kawaraban::application::queries::{FeedArticlesUseCase, ShowArticleUseCase};
use kawaraban::domain::article::ArticleRepository;
use kawaraban::infrastructure::{database, repositories::SqliteArticleRepository};
use kawaraban::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

/// Full router over a fresh in-memory SQLite database.
pub async fn make_test_router() -> Router {
    let pool = database::init_pool("sqlite::memory:")
        .await
        .expect("in-memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    let repository: Arc<dyn ArticleRepository> =
        Arc::new(SqliteArticleRepository::new(Arc::new(pool)));
    build_router(make_state(repository))
}

pub fn make_state(repository: Arc<dyn ArticleRepository>) -> HttpState {
    HttpState {
        create_article: Arc::new(CreateArticleUseCase::new(Arc::clone(&repository))),
        show_article: Arc::new(ShowArticleUseCase::new(Arc::clone(&repository))),
        feed_articles: Arc::new(FeedArticlesUseCase::new(Arc::clone(&repository))),
        delete_article: Arc::new(DeleteArticleUseCase::new(Arc::clone(&repository))),
    }
}
