//! Axum extractors for session authentication.

use crate::auth::session::SESSION_COOKIE;
use crate::config::Config;
use crate::error::AppError;
use crate::storage;
use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub redis: redis::Client,
    pub config: Arc<Config>,
}

/// Authenticated session extractor.
///
/// Extracts the session token from the session cookie and resolves it
/// against the session store. Rejects with 401 `{"error": "Unauthorized"}`
/// when the cookie is missing or the token is unknown or expired, making the
/// authorization check a pure function of (request parts, state).
pub struct AuthSession {
    pub user_id: i64,
    pub token: String,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract session token from cookie
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        // Get Redis connection
        let mut con = state
            .redis
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Internal(format!("Redis connection error: {}", e)))?;

        // Look up session
        let session = storage::session::get_session(&mut con, &token)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        Ok(AuthSession {
            user_id: session.user_id,
            token,
        })
    }
}

/// Optional authenticated session extraction, for handlers that behave the
/// same with or without a session (logout).
///
/// Yields Some(AuthSession) if a valid session cookie is present, None
/// otherwise. Does not fail the request if auth is missing or invalid,
/// which is what makes logout idempotent.
impl OptionalFromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        // Try to extract auth session, but don't fail if it's not present
        match <AuthSession as FromRequestParts<AppState>>::from_request_parts(parts, state).await {
            Ok(session) => Ok(Some(session)),
            Err(_) => Ok(None),
        }
    }
}
