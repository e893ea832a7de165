//! Request and response models for the API.
//!
//! All models use serde for serialization/deserialization.
//! Storage models represent Redis data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Models
// ============================================================================

/// Request to create a new account.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    /// Optional profile fields default to empty strings when omitted.
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub bio: String,
}

/// Request to authenticate with username + password.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public user profile returned by signup, login, and check_session.
///
/// Never includes the password digest.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub image_url: String,
    pub bio: String,
}

impl From<&StoredUser> for UserProfile {
    fn from(user: &StoredUser) -> Self {
        UserProfile {
            id: user.id,
            username: user.username.clone(),
            image_url: user.image_url.clone(),
            bio: user.bio.clone(),
        }
    }
}

// ============================================================================
// Recipe Models
// ============================================================================

/// Request to create a recipe. The owner is never client-supplied; it is
/// taken from the authenticated session.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i64,
}

/// Recipe as returned by the API, embedding the owner's public profile.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i64,
    pub user: UserProfile,
}

// ============================================================================
// Storage Models
// ============================================================================

/// User data as stored in Redis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: i64,
    pub username: String,
    pub password_digest: String,
    pub image_url: String,
    pub bio: String,
    pub created_at: u64,
}

/// Recipe data as stored in Redis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecipe {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i64,
    pub user_id: i64,
    pub created_at: u64,
}

/// Session data as stored in Redis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user_id: i64,
    pub created_at: u64,
}
