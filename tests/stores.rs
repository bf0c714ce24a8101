//! Registry and obtained-set behaviour against a real (in-memory) SQLite database.
mod common;

use herebot::database::{obtained, registry};
use serenity::model::id::UserId;

#[tokio::test]
async fn registration_is_last_write_wins() {
    let pool = common::memory_pool().await;
    let user = UserId::new(42);

    assert_eq!(registry::get_display_name(&pool, user).await.unwrap(), None);
    registry::upsert_display_name(&pool, user, "A").await.unwrap();
    registry::upsert_display_name(&pool, user, "B").await.unwrap();
    assert_eq!(
        registry::get_display_name(&pool, user).await.unwrap(),
        Some("B".to_string())
    );

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM iam")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn registrations_are_per_user() {
    let pool = common::memory_pool().await;
    registry::upsert_display_name(&pool, UserId::new(1), "Zezima")
        .await
        .unwrap();
    assert_eq!(
        registry::get_display_name(&pool, UserId::new(2)).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn repeated_add_is_stored_once() {
    let pool = common::memory_pool().await;
    let user = UserId::new(7);
    for _ in 0..3 {
        obtained::add_obtained_pet(&pool, user, 5).await.unwrap();
    }
    let pets = obtained::list_obtained_pets(&pool, user).await.unwrap();
    assert_eq!(pets.into_iter().collect::<Vec<_>>(), vec![5]);
}

#[tokio::test]
async fn remove_of_absent_pet_is_a_no_op() {
    let pool = common::memory_pool().await;
    let user = UserId::new(7);
    obtained::remove_obtained_pet(&pool, user, 9).await.unwrap();
    obtained::add_obtained_pet(&pool, user, 3).await.unwrap();
    obtained::remove_obtained_pet(&pool, user, 9).await.unwrap();
    let pets = obtained::list_obtained_pets(&pool, user).await.unwrap();
    assert!(!pets.contains(&9));
    assert!(pets.contains(&3));
}

#[tokio::test]
async fn remove_after_add_clears_entry() {
    let pool = common::memory_pool().await;
    let user = UserId::new(7);
    obtained::add_obtained_pet(&pool, user, 3).await.unwrap();
    obtained::remove_obtained_pet(&pool, user, 3).await.unwrap();
    assert!(
        obtained::list_obtained_pets(&pool, user)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn obtained_sets_do_not_leak_between_users() {
    let pool = common::memory_pool().await;
    obtained::add_obtained_pet(&pool, UserId::new(1), 1).await.unwrap();
    obtained::add_obtained_pet(&pool, UserId::new(2), 2).await.unwrap();
    let first = obtained::list_obtained_pets(&pool, UserId::new(1)).await.unwrap();
    assert_eq!(first.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[tokio::test]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bot.sqlite");
    let user = UserId::new(11);
    {
        let pool = herebot::database::init::open(&path).await.unwrap();
        registry::upsert_display_name(&pool, user, "Lynx Titan")
            .await
            .unwrap();
        obtained::add_obtained_pet(&pool, user, 4).await.unwrap();
        pool.close().await;
    }
    let pool = herebot::database::init::open(&path).await.unwrap();
    assert_eq!(
        registry::get_display_name(&pool, user).await.unwrap(),
        Some("Lynx Titan".to_string())
    );
    assert!(obtained::list_obtained_pets(&pool, user).await.unwrap().contains(&4));
}
