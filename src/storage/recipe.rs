//! Recipe Redis operations.
//!
//! Redis key patterns:
//! - `recipe:{id}` — recipe record (JSON, no TTL)
//!
//! Recipes are only ever created and listed; there is no update or delete
//! path in this API.

use crate::models::StoredRecipe;
use redis::AsyncCommands;

/// Store a recipe record.
pub async fn store_recipe<C>(con: &mut C, recipe: &StoredRecipe) -> Result<(), redis::RedisError>
where
    C: AsyncCommands,
{
    let key = format!("recipe:{}", recipe.id);
    let json =
        serde_json::to_string(recipe).map_err(|e| super::json_error("JSON serialize", e))?;

    con.set::<_, _, ()>(&key, json).await?;
    Ok(())
}

/// List all recipes, sorted by id for stable output.
///
/// Scans for keys matching `recipe:*` and deserializes each. A record that
/// expires between SCAN and GET is skipped rather than failing the listing.
pub async fn list_recipes<C>(con: &mut C) -> Result<Vec<StoredRecipe>, redis::RedisError>
where
    C: AsyncCommands,
{
    let mut recipes = Vec::new();
    let keys = super::scan_keys(con, "recipe:*").await?;

    for key in keys {
        let json: Option<String> = con.get(&key).await?;
        if let Some(data) = json {
            if let Ok(recipe) = serde_json::from_str::<StoredRecipe>(&data) {
                recipes.push(recipe);
            }
        }
    }

    recipes.sort_by_key(|recipe| recipe.id);
    Ok(recipes)
}
