//! Storage interface for authors and articles: one method per query.
//!
//! Handlers never see SQL; they go through [`BlogStore`], implemented by [`PgStore`]
//! for PostgreSQL and [`MemoryStore`] for tests.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_tables, PgStore};

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Hard cap on rows returned by the article listing.
pub const LIST_LIMIT: i64 = 100;

/// Author row to insert. The password is already hashed.
#[derive(Clone, Debug)]
pub struct NewAuthor {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// What authentication needs to know about an author.
#[derive(Clone, Debug)]
pub struct AuthorCredentials {
    pub id: i32,
    pub password_hash: String,
}

#[derive(Clone, Debug)]
pub struct NewArticle {
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

/// Article joined with its author's username. `created_at` is nullable in the schema and is
/// read as `timestamp` cast to `timestamptz`, i.e. interpreted in the session time zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ArticleWithAuthor {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub author_name: String,
}

#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// Insert an author and return the storage-assigned id. Fails on duplicate username or email.
    async fn insert_author(&self, author: &NewAuthor) -> Result<i32, AppError>;

    async fn find_credentials(&self, username: &str) -> Result<Option<AuthorCredentials>, AppError>;

    /// Insert an article and return its id. Fails if `author_id` does not reference an author.
    async fn insert_article(&self, article: &NewArticle) -> Result<i32, AppError>;

    /// Newest first, at most `limit` rows.
    async fn recent_articles(&self, limit: i64) -> Result<Vec<ArticleWithAuthor>, AppError>;

    async fn count_articles(&self) -> Result<i64, AppError>;

    async fn count_authors(&self) -> Result<i64, AppError>;
}
