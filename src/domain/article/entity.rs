// src/domain/article/entity.rs
use crate::domain::article::value_objects::{Body, Description, Slug, Title};
use crate::domain::errors::ValidationError;
use crate::domain::validated::Validated;

/// An article that has been (or is about to be) persisted. Exists only when
/// every component is individually valid or explicitly trusted; never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedArticle {
    pub slug: Slug,
    pub title: Title,
    pub description: Description,
    pub body: Body,
}

impl CreatedArticle {
    /// Validates all three raw fields independently and accumulates every
    /// violation in field order (title, description, body). On success a
    /// freshly generated slug is attached; slug generation cannot fail.
    pub fn new(
        title: Option<&str>,
        description: Option<&str>,
        body: Option<&str>,
    ) -> Validated<Self, ValidationError> {
        Title::new(title)
            .map_errors(ValidationError::from)
            .zip(Description::new(description).map_errors(ValidationError::from))
            .zip(Body::new(body).map_errors(ValidationError::from))
            .map(|((title, description), body)| Self {
                slug: Slug::generate(),
                title,
                description,
                body,
            })
    }

    /// Trusted reconstruction from components already known valid. Used by
    /// the persistence layer when rehydrating rows; never for raw input.
    pub fn new_without_validation(
        slug: Slug,
        title: Title,
        description: Description,
        body: Body,
    ) -> Self {
        Self {
            slug,
            title,
            description,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{BodyError, DescriptionError, TitleError};

    #[test]
    fn valid_input_builds_an_article_with_a_generated_slug() {
        match CreatedArticle::new(Some("ok title"), Some("ok description"), Some("ok body")) {
            Validated::Valid(article) => {
                assert_eq!(article.title.as_str(), "ok title");
                assert_eq!(article.description.as_str(), "ok description");
                assert_eq!(article.body.as_str(), "ok body");
                assert!(Slug::new(Some(article.slug.as_str())).is_valid());
            }
            Validated::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        }
    }

    #[test]
    fn missing_title_yields_exactly_one_required_error() {
        match CreatedArticle::new(None, Some("d"), Some("b")) {
            Validated::Valid(article) => panic!("unexpected success: {article:?}"),
            Validated::Invalid(errors) => {
                assert_eq!(
                    errors.into_vec(),
                    vec![ValidationError::Title(TitleError::Required)]
                );
            }
        }
    }

    #[test]
    fn independent_failures_all_surface_in_field_order() {
        let long_title = "x".repeat(33);
        let long_body = "y".repeat(1025);
        match CreatedArticle::new(Some(&long_title), Some("d"), Some(&long_body)) {
            Validated::Valid(article) => panic!("unexpected success: {article:?}"),
            Validated::Invalid(errors) => {
                assert_eq!(
                    errors.into_vec(),
                    vec![
                        ValidationError::Title(TitleError::TooLong { max: 32 }),
                        ValidationError::Body(BodyError::TooLong { max: 1024 }),
                    ]
                );
            }
        }
    }

    #[test]
    fn all_fields_missing_yields_three_errors() {
        match CreatedArticle::new(None, None, None) {
            Validated::Valid(article) => panic!("unexpected success: {article:?}"),
            Validated::Invalid(errors) => {
                assert_eq!(
                    errors.into_vec(),
                    vec![
                        ValidationError::Title(TitleError::Required),
                        ValidationError::Description(DescriptionError::Required),
                        ValidationError::Body(BodyError::Required),
                    ]
                );
            }
        }
    }

    #[test]
    fn failure_count_is_the_sum_of_per_field_failures() {
        let long_title = "x".repeat(33);
        let long_description = "d".repeat(65);
        match CreatedArticle::new(Some(&long_title), Some(&long_description), None) {
            Validated::Valid(article) => panic!("unexpected success: {article:?}"),
            Validated::Invalid(errors) => {
                assert_eq!(
                    errors.into_vec(),
                    vec![
                        ValidationError::Title(TitleError::TooLong { max: 32 }),
                        ValidationError::Description(DescriptionError::TooLong { max: 64 }),
                        ValidationError::Body(BodyError::Required),
                    ]
                );
            }
        }
    }

    #[test]
    fn trusted_reconstruction_takes_components_verbatim() {
        let article = CreatedArticle::new_without_validation(
            Slug::new_without_validation("not-even-a-valid-slug"),
            Title::new_without_validation("t"),
            Description::new_without_validation("d"),
            Body::new_without_validation("b"),
        );
        assert_eq!(article.slug.as_str(), "not-even-a-valid-slug");
        assert_eq!(article.title.as_str(), "t");
        assert_eq!(article.description.as_str(), "d");
        assert_eq!(article.body.as_str(), "b");
    }
}
