//! Session Redis operations.
//!
//! Redis key patterns:
//! - `session:{token}` — session data (JSON)
//!
//! Sessions carry a TTL so abandoned logins expire on their own; logout
//! deletes them eagerly.
//!
//! ## Security: Zeroizing Sensitive Data
//!
//! Session JSON snapshots carry the bearer token, so they are wrapped in
//! `zeroize::Zeroizing` and cleared from the application's memory after
//! deserialization. Redis stores data in its own memory space; this is
//! defense-in-depth for the application layer only.

use crate::models::StoredSession;
use redis::AsyncCommands;
use zeroize::Zeroizing;

/// Store a session in Redis with TTL.
pub async fn store_session<C>(
    con: &mut C,
    session: &StoredSession,
    ttl_secs: u64,
) -> Result<(), redis::RedisError>
where
    C: AsyncCommands,
{
    let key = format!("session:{}", session.token);
    let json =
        serde_json::to_string(session).map_err(|e| super::json_error("JSON serialize", e))?;

    con.set_ex::<_, _, ()>(&key, json, ttl_secs).await?;
    Ok(())
}

/// Get a session by token.
///
/// The session JSON is zeroized after deserialization.
pub async fn get_session<C>(
    con: &mut C,
    token: &str,
) -> Result<Option<StoredSession>, redis::RedisError>
where
    C: AsyncCommands,
{
    let key = format!("session:{}", token);
    let json: Option<String> = con.get(&key).await?;

    match json {
        Some(data) => {
            // Wrap the JSON string in Zeroizing to clear it after use
            let zeroizing_data = Zeroizing::new(data);
            let session = serde_json::from_str(&zeroizing_data)
                .map_err(|e| super::json_error("JSON deserialize", e))?;
            // zeroizing_data is automatically zeroized when dropped here
            Ok(Some(session))
        }
        None => Ok(None),
    }
}

/// Delete a session from Redis.
///
/// Returns true if the session was deleted, false if it didn't exist.
pub async fn delete_session<C>(con: &mut C, token: &str) -> Result<bool, redis::RedisError>
where
    C: AsyncCommands,
{
    let key = format!("session:{}", token);
    let deleted: i32 = con.del(&key).await?;
    Ok(deleted > 0)
}
