//! Authentication layer for password verification and session management.

pub mod middleware;
pub mod password;
pub mod session;

pub use middleware::{AppState, AuthSession};
pub use password::{hash_password, verify_password};
pub use session::{generate_session_token, session_cookie, SESSION_COOKIE};
