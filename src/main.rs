use anyhow::Result;
use kawaraban::application::commands::{CreateArticleUseCase, DeleteArticleUseCase};
use kawaraban::application::queries::{FeedArticlesUseCase, ShowArticleUseCase};
use kawaraban::config::AppConfig;
use kawaraban::domain::article::ArticleRepository;
use kawaraban::infrastructure::{database, repositories::SqliteArticleRepository};
use kawaraban::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let repository: Arc<dyn ArticleRepository> = Arc::new(SqliteArticleRepository::new(pool));

    let state = HttpState {
        create_article: Arc::new(CreateArticleUseCase::new(Arc::clone(&repository))),
        show_article: Arc::new(ShowArticleUseCase::new(Arc::clone(&repository))),
        feed_articles: Arc::new(FeedArticlesUseCase::new(Arc::clone(&repository))),
        delete_article: Arc::new(DeleteArticleUseCase::new(Arc::clone(&repository))),
    };

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(addr = %config.listen_addr(), "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
    }
}
