// tests/support/mocks.rs
use async_trait::async_trait;
use kawaraban::domain::article::{
    ArticleRepository, CreateError, CreatedArticle, DeleteError, FindBySlugError, FindError, Slug,
};

/// Fixed-behavior repository double. Unset results fall back to not-found;
/// `create` echoes the article it was given, like the real repository.
#[derive(Default)]
pub struct StubArticleRepository {
    pub articles: Vec<CreatedArticle>,
    pub find_by_slug_result: Option<Result<CreatedArticle, FindBySlugError>>,
    pub delete_result: Option<Result<(), DeleteError>>,
}

#[async_trait]
impl ArticleRepository for StubArticleRepository {
    async fn find(&self) -> Result<Vec<CreatedArticle>, FindError> {
        Ok(self.articles.clone())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<CreatedArticle, FindBySlugError> {
        match &self.find_by_slug_result {
            Some(result) => result.clone(),
            None => Err(FindBySlugError::NotFound { slug: slug.clone() }),
        }
    }

    async fn create(&self, article: &CreatedArticle) -> Result<CreatedArticle, CreateError> {
        Ok(article.clone())
    }

    async fn delete(&self, slug: &Slug) -> Result<(), DeleteError> {
        match &self.delete_result {
            Some(result) => result.clone(),
            None => Err(DeleteError::NotFound { slug: slug.clone() }),
        }
    }
}
