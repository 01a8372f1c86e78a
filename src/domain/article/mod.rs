pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::CreatedArticle;
pub use repository::{ArticleRepository, CreateError, DeleteError, FindBySlugError, FindError};
pub use value_objects::{Body, Description, Slug, Title};
