//! Redis storage layer for users, recipes, and sessions.
//!
//! All functions are async and use redis::AsyncCommands.
//! Data is serialized to JSON for storage in Redis.
//!
//! Key patterns:
//! - `user:{id}` — user record (JSON)
//! - `username:{username}` — username lookup to user id (STRING)
//! - `recipe:{id}` — recipe record (JSON)
//! - `session:{token}` — session data (JSON, TTL)
//! - `seq:user`, `seq:recipe` — id sequences (INCR)

pub mod recipe;
pub mod session;
pub mod user;

use redis::AsyncCommands;

/// Maximum number of keys returned by scan_keys to prevent unbounded memory allocation.
const SCAN_MAX_KEYS: usize = 10_000;

/// Allocate the next integer id from a sequence key.
pub async fn next_id<C>(con: &mut C, sequence: &str) -> Result<i64, redis::RedisError>
where
    C: AsyncCommands,
{
    con.incr(sequence, 1).await
}

/// Scan for Redis keys matching a pattern using SCAN (non-blocking).
///
/// Unlike KEYS, SCAN does not block the Redis server during iteration.
/// Capped at SCAN_MAX_KEYS results to prevent unbounded memory growth.
pub async fn scan_keys<C>(con: &mut C, pattern: &str) -> Result<Vec<String>, redis::RedisError>
where
    C: AsyncCommands,
{
    let mut all_keys = Vec::new();
    let mut cursor: u64 = 0;
    loop {
        let (new_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
            .arg(cursor)
            .arg("MATCH")
            .arg(pattern)
            .arg("COUNT")
            .arg(100)
            .query_async(con)
            .await?;
        all_keys.extend(keys);
        if all_keys.len() >= SCAN_MAX_KEYS {
            tracing::warn!(pattern = %pattern, cap = SCAN_MAX_KEYS, "Key scan truncated; results are incomplete");
            all_keys.truncate(SCAN_MAX_KEYS);
            break;
        }
        cursor = new_cursor;
        if cursor == 0 {
            break;
        }
    }
    Ok(all_keys)
}

/// Wrap a serde_json error into a RedisError for uniform storage results.
pub(crate) fn json_error(context: &'static str, err: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((
        redis::ErrorKind::TypeError,
        context,
        err.to_string(),
    ))
}
