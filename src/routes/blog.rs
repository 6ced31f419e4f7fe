//! Blog routes: article listing, registration, publishing, metrics.

use crate::handlers::{create_article, get_metrics, list_articles, register};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_articles))
        .route("/register", post(register))
        .route("/articles", post(create_article))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}
