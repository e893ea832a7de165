//! Ladle application entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Connect to Redis
//! 3. Build router with API routes
//! 4. Apply security headers middleware
//! 5. Start Axum server

use ladle::{auth::middleware::AppState, config::Config, middleware::security_headers, routes};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting ladle on {}", config.bind_addr);

    // Connect to Redis
    let redis_client = redis::Client::open(config.redis_url.as_str()).expect("Invalid Redis URL");

    // Verify Redis connection
    let _con = redis_client
        .get_multiplexed_async_connection()
        .await
        .expect("Failed to connect to Redis");

    // Build shared state
    let state = AppState {
        redis: redis_client,
        config: Arc::new(config.clone()),
    };

    // Explicit CORS: deny all cross-origin requests (single-origin deployment).
    // CorsLayer::new() with no allowed origins rejects all CORS preflight requests.
    let cors = CorsLayer::new();

    let app = routes::api_router()
        .layer(cors)
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", config.bind_addr);

    // Start server
    axum::serve(listener, app).await.expect("Server error");
}
