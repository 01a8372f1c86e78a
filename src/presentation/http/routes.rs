// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::get,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/articles",
            get(articles::get_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{slug}",
            get(articles::get_article).delete(articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> &'static str {
    "OK"
}
