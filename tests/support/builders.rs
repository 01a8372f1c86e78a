// tests/support/builders.rs
use kawaraban::domain::article::{Body, CreatedArticle, Description, Slug, Title};

/// Article from trusted components, for wiring repository doubles.
pub fn created_article(slug: &str, title: &str, description: &str, body: &str) -> CreatedArticle {
    CreatedArticle::new_without_validation(
        Slug::new_without_validation(slug),
        Title::new_without_validation(title),
        Description::new_without_validation(description),
        Body::new_without_validation(body),
    )
}
