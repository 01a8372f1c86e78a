// src/infrastructure/repositories/sqlite_article.rs
use crate::domain::article::{
    ArticleRepository, Body, CreateError, CreatedArticle, DeleteError, Description,
    FindBySlugError, FindError, Slug, Title,
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

/// SQL faults are not part of the repository contract; persisted rows are
/// assumed readable and writable, so a failing query is a fatal defect here.
fn db_fault(err: sqlx::Error) -> ! {
    tracing::error!(error = %err, "article storage fault");
    panic!("article storage fault: {err}");
}

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    slug: String,
    title: String,
    description: String,
    body: String,
}

impl From<ArticleRow> for CreatedArticle {
    fn from(row: ArticleRow) -> Self {
        // Rows were validated before they were written; rehydration goes
        // through the trusted factories only.
        CreatedArticle::new_without_validation(
            Slug::new_without_validation(row.slug),
            Title::new_without_validation(row.title),
            Description::new_without_validation(row.description),
            Body::new_without_validation(row.body),
        )
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn find(&self) -> Result<Vec<CreatedArticle>, FindError> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT slug, title, description, body FROM articles ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await
        .unwrap_or_else(|err| db_fault(err));

        Ok(rows.into_iter().map(CreatedArticle::from).collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<CreatedArticle, FindBySlugError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT slug, title, description, body FROM articles WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .unwrap_or_else(|err| db_fault(err));

        row.map(CreatedArticle::from)
            .ok_or_else(|| FindBySlugError::NotFound { slug: slug.clone() })
    }

    async fn create(&self, article: &CreatedArticle) -> Result<CreatedArticle, CreateError> {
        sqlx::query("INSERT INTO articles (slug, title, description, body) VALUES (?, ?, ?, ?)")
            .bind(article.slug.as_str())
            .bind(article.title.as_str())
            .bind(article.description.as_str())
            .bind(article.body.as_str())
            .execute(&*self.pool)
            .await
            .unwrap_or_else(|err| db_fault(err));

        Ok(article.clone())
    }

    async fn delete(&self, slug: &Slug) -> Result<(), DeleteError> {
        let result = sqlx::query("DELETE FROM articles WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&*self.pool)
            .await
            .unwrap_or_else(|err| db_fault(err));

        if result.rows_affected() == 0 {
            return Err(DeleteError::NotFound { slug: slug.clone() });
        }
        Ok(())
    }
}
