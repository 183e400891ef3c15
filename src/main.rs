mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::pg_store::PgMemeStore;
use services::store::{MemeStore, MemoryMemeStore};

#[tokio::main]
async fn main() {
    // A missing .env file is the normal production case.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring malformed .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();

    let store: Arc<dyn MemeStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "postgres meme store ready");
            Arc::new(PgMemeStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; memes are kept in memory and lost on restart");
            Arc::new(MemoryMemeStore::new())
        }
    };

    let port = config.port;
    let state = state::AppState::new(store, config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "memegen listening");
    axum::serve(listener, app).await.expect("server failed");
}
