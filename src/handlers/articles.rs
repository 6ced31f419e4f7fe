//! GET / and POST /articles.

use super::decode_json;
use crate::error::AppError;
use crate::extractors::BasicCredentials;
use crate::response::{created, ok};
use crate::service::{ArticleDraft, BlogService};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse};

pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = BlogService::list_recent(state.store.as_ref()).await?;
    Ok(ok(articles))
}

/// Credentials are checked before the body is decoded, so a bad login with a bad body is a 401.
pub async fn create_article(
    State(state): State<AppState>,
    credentials: BasicCredentials,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let author_id = BlogService::authenticate(state.store.as_ref(), credentials).await?;
    let draft: ArticleDraft = decode_json(&body)?;
    let article = BlogService::create_article(state.store.as_ref(), author_id, draft).await?;
    Ok(created(article))
}
