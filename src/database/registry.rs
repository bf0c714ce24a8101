//! Discord user → OSRS name registrations.

use super::DbPool;
use serenity::model::id::UserId;
use tracing::instrument;

/// Registers `osrs_name` for the user, replacing any earlier registration.
#[instrument(level = "debug", skip(pool))]
pub async fn upsert_display_name(
    pool: &DbPool,
    user_id: UserId,
    osrs_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO iam (user_id, osrs_name) VALUES (?1, ?2)
         ON CONFLICT (user_id) DO UPDATE SET osrs_name = excluded.osrs_name",
    )
    .bind(user_id.to_string())
    .bind(osrs_name)
    .execute(pool)
    .await?;
    Ok(())
}

#[instrument(level = "debug", skip(pool))]
pub async fn get_display_name(
    pool: &DbPool,
    user_id: UserId,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT osrs_name FROM iam WHERE user_id = ?1")
        .bind(user_id.to_string())
        .fetch_optional(pool)
        .await
}
