//! Register authors, authenticate them, publish and list articles, count rows.

use crate::error::{AppError, INVALID_CREDENTIALS};
use crate::extractors::BasicCredentials;
use crate::password::{hash_password, verify_password};
use crate::response::{CreatedArticle, Metrics, RegisteredAuthor};
use crate::store::{ArticleWithAuthor, BlogStore, NewArticle, NewAuthor, LIST_LIMIT};
use serde::Deserialize;

/// `POST /register` body. Absent fields decode as empty strings; only the schema constrains them.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /articles` body. Absent fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

pub struct BlogService;

impl BlogService {
    /// Hash the password and insert the author. Duplicate usernames or emails surface as
    /// the storage error (500), not as a conflict.
    pub async fn register(store: &dyn BlogStore, registration: Registration) -> Result<RegisteredAuthor, AppError> {
        let Registration {
            username,
            email,
            password,
        } = registration;
        // Argon2 is CPU-bound; keep it off the async workers.
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Hash(e.to_string()))??;
        let id = store
            .insert_author(&NewAuthor {
                username: username.clone(),
                email,
                password_hash,
            })
            .await?;
        tracing::info!(author_id = id, username = %username, "author registered");
        Ok(RegisteredAuthor { id, username })
    }

    /// Resolve Basic credentials to an author id. Unknown username, wrong password and a failed
    /// lookup all produce the same 401.
    pub async fn authenticate(store: &dyn BlogStore, credentials: BasicCredentials) -> Result<i32, AppError> {
        let BasicCredentials { username, password } = credentials;
        let found = match store.find_credentials(&username).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "credential lookup failed");
                None
            }
        };
        let Some(found) = found else {
            tracing::warn!(username = %username, "authentication failed: unknown username");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS));
        };
        let stored_hash = found.password_hash;
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !matches {
            tracing::warn!(username = %username, "authentication failed: wrong password");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS));
        }
        Ok(found.id)
    }

    pub async fn create_article(
        store: &dyn BlogStore,
        author_id: i32,
        draft: ArticleDraft,
    ) -> Result<CreatedArticle, AppError> {
        let ArticleDraft { title, content } = draft;
        let id = store
            .insert_article(&NewArticle {
                author_id,
                title: title.clone(),
                content,
            })
            .await?;
        tracing::info!(article_id = id, author_id, "article created");
        Ok(CreatedArticle { id, title })
    }

    /// Newest articles first, truncated at [`LIST_LIMIT`].
    pub async fn list_recent(store: &dyn BlogStore) -> Result<Vec<ArticleWithAuthor>, AppError> {
        store.recent_articles(LIST_LIMIT).await
    }

    pub async fn metrics(store: &dyn BlogStore) -> Result<Metrics, AppError> {
        let total_articles = store.count_articles().await?;
        let total_authors = store.count_authors().await?;
        Ok(Metrics {
            total_articles,
            total_authors,
        })
    }
}
