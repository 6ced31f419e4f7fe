//! HTTP handlers for authors, articles and metrics.

pub mod articles;
pub mod authors;
pub mod metrics;

pub use articles::*;
pub use authors::*;
pub use metrics::*;

use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Decode a JSON body ourselves so every malformed payload, including an empty body, maps to
/// 400 rather than axum's 415/422 rejections. Missing fields are left to the request types.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}
