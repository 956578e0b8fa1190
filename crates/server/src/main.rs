use std::sync::Arc;

use server::clients::lichess::LichessClient;
use server::config;
use server::routes;
use server::store::PositionStore;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    // Parse the PGN database once; a missing or unreadable file leaves the
    // store empty and the server degraded rather than dead.
    let store = match PositionStore::load(&config.database_path) {
        Ok(store) => {
            tracing::info!("Loaded {} endgame positions", store.len());
            store
        }
        Err(e) => {
            tracing::error!("Failed to load PGN database: {e}");
            PositionStore::default()
        }
    };

    let lichess = LichessClient::new();

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/position", get(routes::position::get_position))
        .route("/api/eval", get(routes::eval::get_eval))
        // Shared state
        .layer(Extension(Arc::new(store)))
        .layer(Extension(lichess))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
