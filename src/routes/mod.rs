//! API route handlers.

pub mod auth;
pub mod recipes;

use crate::auth::middleware::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/signup", post(auth::signup))
        .route("/check_session", get(auth::check_session))
        .route("/login", post(auth::login))
        .route("/logout", delete(auth::logout))
        // Recipe endpoints
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
}
