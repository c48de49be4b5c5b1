//! Integration tests for soft-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted entities are hidden from `find_by_id`, `list` and `update`
//! - Soft-delete is idempotent (second call returns `false`)
//! - A soft-deleted name can be reused
//! - The pattern is consistent across all four entity types

use catalog_core::cast_member::CastMemberRecord;
use catalog_core::category::CategoryRecord;
use catalog_core::genre::GenreRecord;
use catalog_core::video::VideoRecord;
use catalog_db::repositories::{CastMemberRepo, CategoryRepo, GenreRepo, VideoRepo};
use sqlx::PgPool;
use uuid::Uuid;

fn category(name: &str) -> CategoryRecord {
    CategoryRecord {
        name: name.to_string(),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_deleted_category_is_not_found(pool: PgPool) {
    let id = Uuid::new_v4();
    CategoryRepo::create(&pool, id, &category("Action"))
        .await
        .unwrap();

    assert!(CategoryRepo::soft_delete(&pool, id).await.unwrap());

    assert!(CategoryRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
    assert!(CategoryRepo::update(&pool, id, &category("Revived"))
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let id = Uuid::new_v4();
    CategoryRepo::create(&pool, id, &category("Action"))
        .await
        .unwrap();

    assert!(CategoryRepo::soft_delete(&pool, id).await.unwrap());
    assert!(!CategoryRepo::soft_delete(&pool, id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_unknown_id_returns_false(pool: PgPool) {
    assert!(!GenreRepo::soft_delete(&pool, Uuid::new_v4()).await.unwrap());
    assert!(!CastMemberRepo::soft_delete(&pool, Uuid::new_v4()).await.unwrap());
    assert!(!VideoRepo::soft_delete(&pool, Uuid::new_v4()).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleted_name_can_be_reused(pool: PgPool) {
    let id = Uuid::new_v4();
    CategoryRepo::create(&pool, id, &category("Reused"))
        .await
        .unwrap();
    CategoryRepo::soft_delete(&pool, id).await.unwrap();

    CategoryRepo::create(&pool, Uuid::new_v4(), &category("Reused"))
        .await
        .expect("name of a deleted category should be free");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_consistent_across_entities(pool: PgPool) {
    let genre_id = Uuid::new_v4();
    GenreRepo::create(
        &pool,
        genre_id,
        &GenreRecord {
            name: "Noir".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let member_id = Uuid::new_v4();
    CastMemberRepo::create(
        &pool,
        member_id,
        &CastMemberRecord {
            name: "An Actor".to_string(),
            kind: 2,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let video_id = Uuid::new_v4();
    VideoRepo::create(
        &pool,
        video_id,
        &VideoRecord {
            title: "Noir Film".to_string(),
            description: "a b c d e f g h i j k".to_string(),
            year_launched: 1950,
            rating: "16".to_string(),
            duration: 80,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(GenreRepo::soft_delete(&pool, genre_id).await.unwrap());
    assert!(CastMemberRepo::soft_delete(&pool, member_id).await.unwrap());
    assert!(VideoRepo::soft_delete(&pool, video_id).await.unwrap());

    assert!(GenreRepo::find_by_id(&pool, genre_id).await.unwrap().is_none());
    assert!(CastMemberRepo::find_by_id(&pool, member_id)
        .await
        .unwrap()
        .is_none());
    assert!(VideoRepo::find_by_id(&pool, video_id).await.unwrap().is_none());
    assert!(VideoRepo::list(&pool).await.unwrap().is_empty());
}
