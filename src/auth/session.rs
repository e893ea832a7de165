//! Session token generation and cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};
use base64::{engine::general_purpose, Engine as _};
use rand::Rng;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "session";

/// Generate a cryptographically random session token.
///
/// Returns a base64-encoded string (44 characters) from 32 random bytes.
pub fn generate_session_token() -> String {
    let mut rng = rand::rng();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    general_purpose::STANDARD.encode(bytes)
}

/// Build the session cookie for a freshly issued token.
///
/// HttpOnly so scripts cannot read the token; SameSite=Lax; Secure per
/// deployment config.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Build an expired session cookie that clears the client's token.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build()
}
