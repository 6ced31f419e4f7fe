//! Route tables and the assembled application router.

pub mod blog;
pub mod common;

pub use blog::blog_routes;
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Blog endpoints plus health/ready/version, with request tracing and a body size limit.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(blog_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
