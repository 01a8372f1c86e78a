pub mod feed_articles;
pub mod show_article;

pub use feed_articles::{FeedArticlesError, FeedArticlesUseCase, FeedCreatedArticles};
pub use show_article::{ShowArticleError, ShowArticleUseCase};
