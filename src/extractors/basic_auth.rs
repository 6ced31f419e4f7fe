//! Extract HTTP Basic credentials from the `Authorization` header.

use crate::error::{AppError, AUTHORIZATION_REQUIRED};
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;

const SCHEME: &str = "basic ";

/// Username and password as sent by the client. Nothing here has been verified.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl BasicCredentials {
    /// Parse `Basic base64(username:password)`. The scheme is case-insensitive and the
    /// password is everything after the first colon, so it may itself contain colons.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        Self::parse(value)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let prefix = value.get(..SCHEME.len())?;
        if !prefix.eq_ignore_ascii_case(SCHEME) {
            return None;
        }
        let encoded = value.get(SCHEME.len()..)?.trim();
        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(BasicCredentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).ok_or(AppError::Unauthorized(AUTHORIZATION_REQUIRED))
    }
}
