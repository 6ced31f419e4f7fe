//! POST /register.

use super::decode_json;
use crate::error::AppError;
use crate::response::created;
use crate::service::{BlogService, Registration};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse};

pub async fn register(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let registration: Registration = decode_json(&body)?;
    let author = BlogService::register(state.store.as_ref(), registration).await?;
    Ok(created(author))
}
