//! Named response bodies, one per endpoint.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `POST /register` → 201. Never carries the password or its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredAuthor {
    pub id: i32,
    pub username: String,
}

/// `POST /articles` → 201.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedArticle {
    pub id: i32,
    pub title: String,
}

/// `GET /metrics` → 200. The two counts are read separately and may reflect different instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_articles: i64,
    pub total_authors: i64,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
