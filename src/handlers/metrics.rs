//! GET /metrics.

use crate::error::AppError;
use crate::response::ok;
use crate::service::BlogService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn get_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let metrics = BlogService::metrics(state.store.as_ref()).await?;
    Ok(ok(metrics))
}
