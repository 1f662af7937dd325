//! Store and allocator integration tests
//!
//! Exercises `MessageStore` and the ID allocator directly against an
//! in-memory database, below the HTTP layer.

use contactbox::messages::{id, Message, MessageStore};
use sqlx::sqlite::SqlitePoolOptions;

async fn create_test_store() -> MessageStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    MessageStore::new(pool)
}

fn sample_message(id: &str) -> Message {
    Message {
        id: id.to_string(),
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        message: "hi".to_string(),
        status: true,
    }
}

#[tokio::test]
async fn id_exists_reflects_inserts() {
    let store = create_test_store().await;

    assert!(!store.id_exists("abc12345").await.unwrap());
    store.insert(&sample_message("abc12345")).await.unwrap();
    assert!(store.id_exists("abc12345").await.unwrap());
}

#[tokio::test]
async fn allocate_returns_a_free_id() {
    let store = create_test_store().await;
    store.insert(&sample_message("abc12345")).await.unwrap();

    let allocated = id::allocate(&store).await.unwrap();

    assert_eq!(allocated.len(), id::ID_LEN);
    assert_ne!(allocated, "abc12345");
    assert!(!store.id_exists(&allocated).await.unwrap());
}

#[tokio::test]
async fn duplicate_id_insert_is_rejected() {
    // The primary key is the real uniqueness guarantee; a second insert
    // with the same id must fail even though it passed no existence check.
    let store = create_test_store().await;

    store.insert(&sample_message("abc12345")).await.unwrap();
    let result = store.insert(&sample_message("abc12345")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn update_reports_matched_rows() {
    let store = create_test_store().await;
    store.insert(&sample_message("abc12345")).await.unwrap();

    let matched = store
        .update_full("abc12345", "B", "b@x.com", "bye", false)
        .await
        .unwrap();
    assert_eq!(matched, 1);

    let matched = store
        .update_full("zzzzzzzz", "B", "b@x.com", "bye", false)
        .await
        .unwrap();
    assert_eq!(matched, 0);

    let updated = store.fetch("abc12345").await.unwrap().unwrap();
    assert_eq!(updated.name, "B");
    assert_eq!(updated.id, "abc12345");
}

#[tokio::test]
async fn update_status_touches_nothing_else() {
    let store = create_test_store().await;
    store.insert(&sample_message("abc12345")).await.unwrap();

    let matched = store.update_status("abc12345", false).await.unwrap();
    assert_eq!(matched, 1);

    let updated = store.fetch("abc12345").await.unwrap().unwrap();
    assert!(!updated.status);
    assert_eq!(updated.name, "A");
    assert_eq!(updated.email, "a@x.com");
    assert_eq!(updated.message, "hi");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let store = create_test_store().await;
    store.insert(&sample_message("abc12345")).await.unwrap();

    assert_eq!(store.delete("abc12345").await.unwrap(), 1);
    assert_eq!(store.delete("abc12345").await.unwrap(), 0);
    assert!(store.fetch("abc12345").await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_all_returns_everything() {
    let store = create_test_store().await;
    store.insert(&sample_message("aaaaaaaa")).await.unwrap();
    store.insert(&sample_message("bbbbbbbb")).await.unwrap();

    let all = store.fetch_all().await.unwrap();
    assert_eq!(all.len(), 2);
}
