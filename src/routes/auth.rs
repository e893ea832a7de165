//! Auth API endpoints: signup, check_session, login, logout.

use crate::auth::middleware::{AppState, AuthSession};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{generate_session_token, removal_cookie, session_cookie};
use crate::error::{AppError, AppJson};
use crate::models::{LoginRequest, SignupRequest, StoredSession, StoredUser, UserProfile};
use crate::storage;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use redis::aio::MultiplexedConnection;

/// Create a session for `user_id` and return the cookie carrying its token.
async fn establish_session(
    state: &AppState,
    con: &mut MultiplexedConnection,
    user_id: i64,
) -> Result<Cookie<'static>, AppError> {
    let token = generate_session_token();

    let session = StoredSession {
        token: token.clone(),
        user_id,
        created_at: unix_now(),
    };

    storage::session::store_session(con, &session, state.config.session_ttl_secs).await?;

    Ok(session_cookie(token, state.config.session_cookie_secure))
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

async fn redis_connection(state: &AppState) -> Result<MultiplexedConnection, AppError> {
    state
        .redis
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Redis connection error: {}", e)))
}

/// POST /signup — Create an account and establish a session
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Presence is enforced by deserialization; emptiness is checked here
    if req.username.is_empty() {
        return Err(AppError::BadRequest(
            "Username must not be empty".to_string(),
        ));
    }

    let password_digest = hash_password(&req.password)?;

    let mut con = redis_connection(&state).await?;

    let user = StoredUser {
        id: storage::next_id(&mut con, "seq:user").await?,
        username: req.username,
        password_digest,
        image_url: req.image_url,
        bio: req.bio,
        created_at: unix_now(),
    };

    // The storage layer claims the username atomically; a lost race leaves
    // no partial record behind
    storage::user::create_user(&mut con, &user)
        .await?
        .ok_or_else(|| AppError::Conflict("Username already exists.".to_string()))?;

    let cookie = establish_session(&state, &mut con, user.id).await?;

    tracing::info!(action = "signup", user_id = %user.id, username = %user.username, "New user registered");

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(UserProfile::from(&user)),
    ))
}

/// GET /check_session — Return the current session's user profile
pub async fn check_session(
    session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut con = redis_connection(&state).await?;

    // A session can outlive its user record; treat that as unauthorized
    // rather than an internal fault
    let user = storage::user::get_user(&mut con, session.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    Ok(Json(UserProfile::from(&user)))
}

/// POST /login — Verify credentials and establish a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut con = redis_connection(&state).await?;

    // Unknown user and wrong password must be indistinguishable to the
    // client to avoid username enumeration
    let user = storage::user::get_user_by_username(&mut con, &req.username).await?;

    let user = match user {
        Some(user) if verify_password(&req.password, &user.password_digest)? => user,
        _ => {
            tracing::warn!(action = "login_failed", username = %req.username, "Invalid credentials");
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }
    };

    let cookie = establish_session(&state, &mut con, user.id).await?;

    tracing::info!(action = "login", user_id = %user.id, username = %user.username, "User authenticated");

    Ok((jar.add(cookie), Json(UserProfile::from(&user))))
}

/// DELETE /logout — Invalidate the current session (idempotent)
///
/// Logout never fails: anonymous clients, invalid cookies, and storage
/// errors all end in 204. A session the store couldn't delete expires via
/// its TTL.
pub async fn logout(
    session: Option<AuthSession>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    // No error when anonymous: logging out twice is a no-op
    if let Some(session) = session {
        let deleted = match redis_connection(&state).await {
            Ok(mut con) => storage::session::delete_session(&mut con, &session.token)
                .await
                .map_err(AppError::from),
            Err(e) => Err(e),
        };

        match deleted {
            Ok(_) => {
                tracing::info!(action = "logout", user_id = %session.user_id, "User logged out");
            }
            Err(e) => {
                tracing::warn!(action = "logout", user_id = %session.user_id, error = %e, "Session deletion failed; token expires via TTL");
            }
        }
    }

    (StatusCode::NO_CONTENT, jar.remove(removal_cookie()))
}
