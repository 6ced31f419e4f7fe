//! Blog backend: authors, articles and counts over PostgreSQL, served with axum.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError};
pub use routes::{app, blog_routes, common_routes_with_ready};
pub use service::BlogService;
pub use settings::ServerConfig;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, BlogStore, MemoryStore, PgStore};
