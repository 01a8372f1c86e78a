// src/domain/article/value_objects.rs
use crate::domain::validated::Validated;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identifier of a created article: exactly 32 lowercase ASCII letters or
/// digits. Validated instances come from [`Slug::new`], generated instances
/// from [`Slug::generate`]; [`Slug::new_without_validation`] is the trusted
/// path for values rehydrated from storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug is required")]
    Required,
    #[error("slug must be 32 lowercase letters or digits: {slug}")]
    ValidFormat { slug: String },
}

impl Slug {
    pub const LENGTH: usize = 32;

    /// Required gate first; the format check never runs on absent input.
    pub fn new(value: Option<&str>) -> Validated<Self, SlugError> {
        let Some(value) = value else {
            return Validated::invalid(SlugError::Required);
        };
        if !Self::matches_format(value) {
            return Validated::invalid(SlugError::ValidFormat {
                slug: value.to_owned(),
            });
        }
        Validated::valid(Self(value.to_owned()))
    }

    /// Trusted construction: no checks. Only for input already known valid,
    /// never for externally supplied strings.
    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// A fresh slug from a random 128-bit identifier rendered as dash-free
    /// lowercase hex, which satisfies the format by construction.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// `^[a-z0-9]{32}$`
    fn matches_format(value: &str) -> bool {
        value.len() == Self::LENGTH
            && value
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Title of a created article, at most 32 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title is required")]
    Required,
    #[error("title must be at most {max} characters")]
    TooLong { max: usize },
}

impl Title {
    pub const MAX_CHARS: usize = 32;

    pub fn new(value: Option<&str>) -> Validated<Self, TitleError> {
        let Some(value) = value else {
            return Validated::invalid(TitleError::Required);
        };
        if value.chars().count() > Self::MAX_CHARS {
            return Validated::invalid(TitleError::TooLong {
                max: Self::MAX_CHARS,
            });
        }
        Validated::valid(Self(value.to_owned()))
    }

    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// One-line summary of a created article, at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("description is required")]
    Required,
    #[error("description must be at most {max} characters")]
    TooLong { max: usize },
}

impl Description {
    pub const MAX_CHARS: usize = 64;

    pub fn new(value: Option<&str>) -> Validated<Self, DescriptionError> {
        let Some(value) = value else {
            return Validated::invalid(DescriptionError::Required);
        };
        if value.chars().count() > Self::MAX_CHARS {
            return Validated::invalid(DescriptionError::TooLong {
                max: Self::MAX_CHARS,
            });
        }
        Validated::valid(Self(value.to_owned()))
    }

    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

/// Full text of a created article, at most 1024 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("body is required")]
    Required,
    #[error("body must be at most {max} characters")]
    TooLong { max: usize },
}

impl Body {
    pub const MAX_CHARS: usize = 1024;

    pub fn new(value: Option<&str>) -> Validated<Self, BodyError> {
        let Some(value) = value else {
            return Validated::invalid(BodyError::Required);
        };
        if value.chars().count() > Self::MAX_CHARS {
            return Validated::invalid(BodyError::TooLong {
                max: Self::MAX_CHARS,
            });
        }
        Validated::valid(Self(value.to_owned()))
    }

    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Body> for String {
    fn from(value: Body) -> Self {
        value.0
    }
}
