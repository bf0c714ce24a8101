//! The per-user set of pets marked as obtained.
//!
//! Every call is its own statement. Two overlapping invocations for the same user are not
//! serialised against each other; SQLite only orders the individual statements.

use super::DbPool;
use serenity::model::id::UserId;
use std::collections::BTreeSet;
use tracing::instrument;

/// Marks a pet as obtained. Adding an already-present pet is a no-op.
#[instrument(level = "debug", skip(pool))]
pub async fn add_obtained_pet(
    pool: &DbPool,
    user_id: UserId,
    pet_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO obtained_pets (user_id, pet_id) VALUES (?1, ?2)
         ON CONFLICT (user_id, pet_id) DO NOTHING",
    )
    .bind(user_id.to_string())
    .bind(pet_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Unmarks a pet. Removing a pet that was never added is not an error.
#[instrument(level = "debug", skip(pool))]
pub async fn remove_obtained_pet(
    pool: &DbPool,
    user_id: UserId,
    pet_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM obtained_pets WHERE user_id = ?1 AND pet_id = ?2")
        .bind(user_id.to_string())
        .bind(pet_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[instrument(level = "debug", skip(pool))]
pub async fn list_obtained_pets(
    pool: &DbPool,
    user_id: UserId,
) -> Result<BTreeSet<i64>, sqlx::Error> {
    let ids = sqlx::query_scalar::<_, i64>("SELECT pet_id FROM obtained_pets WHERE user_id = ?1")
        .bind(user_id.to_string())
        .fetch_all(pool)
        .await?;
    Ok(ids.into_iter().collect())
}
