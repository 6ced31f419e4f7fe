//! In-process [`BlogStore`] with the same constraint behaviour as the PostgreSQL schema.

use super::{ArticleWithAuthor, AuthorCredentials, BlogStore, NewArticle, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard};

#[derive(Clone, Debug)]
struct AuthorRow {
    id: i32,
    username: String,
    email: String,
    password_hash: String,
}

#[derive(Clone, Debug)]
struct ArticleRow {
    id: i32,
    author_id: i32,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    authors: Vec<AuthorRow>,
    articles: Vec<ArticleRow>,
}

/// Ids start at 1 and increase like `SERIAL`. Error messages mirror PostgreSQL's.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))
    }
}

fn next_id(len: usize) -> Result<i32, AppError> {
    i32::try_from(len + 1).map_err(|_| AppError::Storage("nextval: reached maximum value of sequence".into()))
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }

    async fn insert_author(&self, author: &NewAuthor) -> Result<i32, AppError> {
        let mut t = self.lock()?;
        if t.authors.iter().any(|a| a.username == author.username) {
            return Err(AppError::Storage(
                r#"duplicate key value violates unique constraint "authors_username_key""#.into(),
            ));
        }
        if t.authors.iter().any(|a| a.email == author.email) {
            return Err(AppError::Storage(
                r#"duplicate key value violates unique constraint "authors_email_key""#.into(),
            ));
        }
        let id = next_id(t.authors.len())?;
        t.authors.push(AuthorRow {
            id,
            username: author.username.clone(),
            email: author.email.clone(),
            password_hash: author.password_hash.clone(),
        });
        Ok(id)
    }

    async fn find_credentials(&self, username: &str) -> Result<Option<AuthorCredentials>, AppError> {
        let t = self.lock()?;
        Ok(t.authors
            .iter()
            .find(|a| a.username == username)
            .map(|a| AuthorCredentials {
                id: a.id,
                password_hash: a.password_hash.clone(),
            }))
    }

    async fn insert_article(&self, article: &NewArticle) -> Result<i32, AppError> {
        let mut t = self.lock()?;
        if !t.authors.iter().any(|a| a.id == article.author_id) {
            return Err(AppError::Storage(
                r#"insert or update on table "articles" violates foreign key constraint "articles_author_id_fkey""#
                    .into(),
            ));
        }
        let id = next_id(t.articles.len())?;
        t.articles.push(ArticleRow {
            id,
            author_id: article.author_id,
            title: article.title.clone(),
            content: article.content.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn recent_articles(&self, limit: i64) -> Result<Vec<ArticleWithAuthor>, AppError> {
        let t = self.lock()?;
        let mut rows: Vec<ArticleWithAuthor> = t
            .articles
            .iter()
            .filter_map(|a| {
                let author = t.authors.iter().find(|au| au.id == a.author_id)?;
                Some(ArticleWithAuthor {
                    id: a.id,
                    author_id: a.author_id,
                    title: a.title.clone(),
                    content: a.content.clone(),
                    created_at: Some(a.created_at),
                    author_name: author.username.clone(),
                })
            })
            .collect();
        rows.sort_by(|x, y| y.created_at.cmp(&x.created_at).then(y.id.cmp(&x.id)));
        rows.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        Ok(rows)
    }

    async fn count_articles(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.articles.len() as i64)
    }

    async fn count_authors(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.authors.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str) -> NewAuthor {
        NewAuthor {
            username: name.into(),
            email: format!("{name}@example.com"),
            password_hash: "hash".into(),
        }
    }

    fn article(author_id: i32, title: &str) -> NewArticle {
        NewArticle {
            author_id,
            title: title.into(),
            content: "body".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_author(&author("ann")).await.unwrap(), 1);
        assert_eq!(store.insert_author(&author("bob")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_username_and_email_are_rejected() {
        let store = MemoryStore::new();
        store.insert_author(&author("ann")).await.unwrap();

        let err = store.insert_author(&author("ann")).await.unwrap_err();
        assert!(err.to_string().contains("authors_username_key"));

        let mut same_email = author("other");
        same_email.email = "ann@example.com".into();
        let err = store.insert_author(&same_email).await.unwrap_err();
        assert!(err.to_string().contains("authors_email_key"));
        assert_eq!(store.count_authors().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn article_requires_existing_author() {
        let store = MemoryStore::new();
        let err = store.insert_article(&article(7, "orphan")).await.unwrap_err();
        assert!(err.to_string().contains("foreign key"));
        assert_eq!(store.count_articles().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn credentials_lookup() {
        let store = MemoryStore::new();
        let id = store.insert_author(&author("ann")).await.unwrap();
        let creds = store.find_credentials("ann").await.unwrap().unwrap();
        assert_eq!(creds.id, id);
        assert_eq!(creds.password_hash, "hash");
        assert!(store.find_credentials("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn recent_articles_newest_first_and_capped() {
        let store = MemoryStore::new();
        let ann = store.insert_author(&author("ann")).await.unwrap();
        for i in 0..5 {
            store.insert_article(&article(ann, &format!("t{i}"))).await.unwrap();
        }
        let rows = store.recent_articles(3).await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["t4", "t3", "t2"]);
        assert!(rows.iter().all(|r| r.author_name == "ann"));
    }
}
