//! User Redis operations.
//!
//! Redis key patterns:
//! - `user:{id}` — individual user data (JSON)
//! - `username:{username}` — username lookup to user_id (STRING)
//!
//! The `username:*` key doubles as the uniqueness guard: creation claims it
//! inside a Lua script, so two concurrent signups for the same username can
//! never both succeed and a lost race leaves no partial record behind.
//!
//! ## Security: Zeroizing Sensitive Data
//!
//! User JSON snapshots carry the password digest, so this module wraps them
//! in `zeroize::Zeroizing` to clear them from the application's memory after
//! deserialization.

use crate::models::StoredUser;
use redis::AsyncCommands;
use zeroize::Zeroizing;

/// Create a user, enforcing username uniqueness atomically.
///
/// Claims `username:{username}` and writes `user:{id}` in a single Lua
/// script. Returns `Ok(None)` when the username is already taken; in that
/// case nothing has been written (the allocated id is simply discarded, like
/// a rolled-back sequence).
pub async fn create_user<C>(
    con: &mut C,
    user: &StoredUser,
) -> Result<Option<()>, redis::RedisError>
where
    C: AsyncCommands,
{
    let username_key = format!("username:{}", user.username);
    let user_key = format!("user:{}", user.id);

    let json = serde_json::to_string(user).map_err(|e| super::json_error("JSON serialize", e))?;

    // Atomic claim-then-write: either both keys are written or neither is
    let script = redis::Script::new(
        r"
        if redis.call('EXISTS', KEYS[1]) == 1 then
            return 0
        end
        redis.call('SET', KEYS[1], ARGV[1])
        redis.call('SET', KEYS[2], ARGV[2])
        return 1
        ",
    );

    let created: i32 = script
        .key(&username_key)
        .key(&user_key)
        .arg(user.id)
        .arg(json)
        .invoke_async(con)
        .await?;

    Ok((created == 1).then_some(()))
}

/// Get a user by ID.
///
/// The user JSON is zeroized after deserialization.
pub async fn get_user<C>(con: &mut C, id: i64) -> Result<Option<StoredUser>, redis::RedisError>
where
    C: AsyncCommands,
{
    let key = format!("user:{}", id);
    let json: Option<String> = con.get(&key).await?;

    match json {
        Some(data) => {
            // Wrap the JSON string in Zeroizing to clear it after use
            let zeroizing_data = Zeroizing::new(data);
            let user = serde_json::from_str(&zeroizing_data)
                .map_err(|e| super::json_error("JSON deserialize", e))?;
            // zeroizing_data is automatically zeroized when dropped here
            Ok(Some(user))
        }
        None => Ok(None),
    }
}

/// Get a user by exact username match.
///
/// Performs a two-step lookup: username -> user_id -> user data.
pub async fn get_user_by_username<C>(
    con: &mut C,
    username: &str,
) -> Result<Option<StoredUser>, redis::RedisError>
where
    C: AsyncCommands,
{
    let username_key = format!("username:{}", username);
    let user_id: Option<i64> = con.get(&username_key).await?;

    match user_id {
        Some(id) => get_user(con, id).await,
        None => Ok(None),
    }
}
