//! Blog server: reads settings from the environment, prepares the database and serves the API.
//!
//! Run from repo root: `cargo run -p blog-server`

use blog_backend::{app, ensure_database_exists, ensure_tables, AppState, PgStore, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blog_backend=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;

    ensure_tables(&pool).await?;
    let state = AppState::new(PgStore::new(pool));

    let router = app(state, config.max_body_bytes);
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("blog server listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
