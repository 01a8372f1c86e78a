// src/presentation/http/controllers/articles.rs
use crate::application::dto::ArticleDto;
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct NewArticleRequest {
    pub article: NewArticleFields,
}

/// Every field is optional on the wire; absence is a `Required` violation
/// reported by the domain, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct NewArticleFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SingleArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize)]
pub struct MultipleArticleResponse {
    #[serde(rename = "articleCount")]
    pub article_count: usize,
    pub articles: Vec<ArticleDto>,
}

pub async fn get_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<MultipleArticleResponse>> {
    let feed = match state.feed_articles.execute().await {
        Ok(feed) => feed,
        Err(never) => match never {},
    };
    Ok(Json(MultipleArticleResponse {
        article_count: feed.articles_count,
        articles: feed.articles.into_iter().map(ArticleDto::from).collect(),
    }))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<SingleArticleResponse>> {
    let article = state.show_article.execute(Some(&slug)).await?;
    Ok(Json(SingleArticleResponse {
        article: article.into(),
    }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(request): Json<NewArticleRequest>,
) -> HttpResult<(StatusCode, Json<SingleArticleResponse>)> {
    let NewArticleFields {
        title,
        description,
        body,
    } = request.article;

    let created = state
        .create_article
        .execute(title.as_deref(), description.as_deref(), body.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SingleArticleResponse {
            article: created.into(),
        }),
    ))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state.delete_article.execute(Some(&slug)).await?;
    Ok(StatusCode::NO_CONTENT)
}
