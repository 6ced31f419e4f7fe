//! Typed errors and HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body of every 401 caused by a bad username or password. Identical for both so
/// callers cannot probe which usernames exist.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Body of a 401 when no usable `Authorization: Basic` header was sent.
pub const AUTHORIZATION_REQUIRED: &str = "authorization required";

/// Challenge sent with every 401.
pub const BASIC_CHALLENGE: &str = r#"Basic realm="blog""#;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: '{value}' ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("password hash: {0}")]
    Hash(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage: {0}")]
    Storage(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Hash(_) | AppError::Db(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Hash(_) => "hash_error",
            AppError::Db(_) | AppError::Storage(_) => "storage_error",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, BASIC_CHALLENGE)], Json(body)).into_response();
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Unauthorized(INVALID_CREDENTIALS).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn everything_else_is_500() {
        assert_eq!(AppError::Hash("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Storage("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Db(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthorized_carries_basic_challenge() {
        let resp = AppError::Unauthorized(AUTHORIZATION_REQUIRED).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).and_then(|v| v.to_str().ok()),
            Some(BASIC_CHALLENGE)
        );
    }

    #[test]
    fn storage_message_is_exposed() {
        let err = AppError::Storage("duplicate key value violates unique constraint".into());
        assert!(err.to_string().contains("duplicate key"));
    }
}
