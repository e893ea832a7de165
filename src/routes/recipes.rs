//! Recipe API endpoints: list and create.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::{AppError, AppJson};
use crate::models::{CreateRecipeRequest, RecipeResponse, StoredRecipe, UserProfile};
use crate::storage;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::collections::HashMap;

/// GET /recipes — List all recipes with their owners' public profiles
pub async fn list_recipes(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state
        .redis
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Redis connection error: {}", e)))?;

    let recipes = storage::recipe::list_recipes(&mut con).await?;

    // Owner profiles are embedded in each recipe; fetch each owner once
    let mut owners: HashMap<i64, UserProfile> = HashMap::new();
    let mut response = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        if !owners.contains_key(&recipe.user_id) {
            match storage::user::get_user(&mut con, recipe.user_id).await? {
                Some(user) => {
                    owners.insert(recipe.user_id, UserProfile::from(&user));
                }
                None => {
                    // Users are never deleted by this API, so a missing owner
                    // means external interference; skip the record
                    tracing::warn!(recipe_id = %recipe.id, user_id = %recipe.user_id, "Recipe owner missing, skipping");
                    continue;
                }
            }
        }

        let user = owners[&recipe.user_id].clone();
        response.push(RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user,
        });
    }

    Ok(Json(response))
}

/// POST /recipes — Create a recipe owned by the session user
pub async fn create_recipe(
    session: AuthSession,
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateRecipeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state
        .redis
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Redis connection error: {}", e)))?;

    // Resolve the owner before writing anything; a stale session is
    // unauthorized, not a server fault
    let owner = storage::user::get_user(&mut con, session.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    let recipe = StoredRecipe {
        id: storage::next_id(&mut con, "seq:recipe").await?,
        title: req.title,
        instructions: req.instructions,
        minutes_to_complete: req.minutes_to_complete,
        // Ownership comes from the session, never from client input
        user_id: session.user_id,
        created_at: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
    };

    storage::recipe::store_recipe(&mut con, &recipe).await?;

    tracing::info!(action = "recipe_created", recipe_id = %recipe.id, user_id = %session.user_id, "Recipe created");

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user: UserProfile::from(&owner),
        }),
    ))
}
