pub mod create_article;
pub mod delete_article;

pub use create_article::{CreateArticleError, CreateArticleUseCase};
pub use delete_article::{DeleteArticleError, DeleteArticleUseCase};
