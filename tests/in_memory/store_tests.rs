//! Integration tests for in-memory store mutations and snapshots.

use super::helpers::{TestStore, day, document, draft, store};
use corkboard::board::{
    domain::{TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_assigns_id_and_creation_timestamp(store: Arc<TestStore>) {
    let id = store
        .add(&draft("Design Homepage Layout", TaskStatus::Todo))
        .await
        .expect("add should succeed");

    let tasks = store.fetch_all().await.expect("fetch should succeed");
    let created = tasks
        .iter()
        .find(|task| task.id() == id)
        .expect("created task present");
    assert_eq!(created.title(), "Design Homepage Layout");
    assert_eq!(created.status(), TaskStatus::Todo);
    assert_eq!(created.updated_at(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshots_are_ordered_newest_first(store: Arc<TestStore>) {
    for (title, created_at) in [
        ("Oldest", day(10)),
        ("Newest", day(15)),
        ("Middle", day(12)),
    ] {
        store
            .seed_document(document(
                title,
                TaskStatus::Todo,
                TaskPriority::Medium,
                created_at,
            ))
            .expect("seed should succeed");
    }

    let tasks = store.fetch_all().await.expect("fetch should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title()).collect();

    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_fields_and_stamps_updated_at(store: Arc<TestStore>) {
    let id = store
        .add(&draft("Write API Documentation", TaskStatus::InProgress))
        .await
        .expect("add should succeed");

    let patch = TaskPatch::new()
        .with_status(TaskStatus::Done)
        .with_priority(TaskPriority::High);
    store.update(id, &patch).await.expect("update should succeed");

    let tasks = store.fetch_all().await.expect("fetch should succeed");
    let updated = tasks
        .iter()
        .find(|task| task.id() == id)
        .expect("updated task present");
    assert_eq!(updated.status(), TaskStatus::Done);
    assert_eq!(updated.priority(), TaskPriority::High);
    assert_eq!(updated.title(), "Write API Documentation");
    assert!(updated.updated_at().is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_reports_not_found(store: Arc<TestStore>) {
    let unknown = corkboard::board::domain::TaskId::new();

    let result = store.update(unknown, &TaskPatch::new()).await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == unknown));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task(store: Arc<TestStore>) {
    let id = store
        .add(&draft("Setup CI/CD Pipeline", TaskStatus::Done))
        .await
        .expect("add should succeed");

    store.delete(id).await.expect("delete should succeed");

    let tasks = store.fetch_all().await.expect("fetch should succeed");
    assert!(tasks.is_empty());
    assert!(matches!(
        store.delete(id).await,
        Err(TaskStoreError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clear_empties_the_collection(store: Arc<TestStore>) {
    for title in ["One", "Two", "Three"] {
        store
            .add(&draft(title, TaskStatus::Todo))
            .await
            .expect("add should succeed");
    }

    store.clear().await.expect("clear should succeed");

    let tasks = store.fetch_all().await.expect("fetch should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_seeded_documents_are_dropped_from_snapshots(store: Arc<TestStore>) {
    store
        .seed_document(document(
            "Wellformed",
            TaskStatus::Todo,
            TaskPriority::High,
            day(14),
        ))
        .expect("seed should succeed");
    let mut broken = document("Broken", TaskStatus::Todo, TaskPriority::High, day(15));
    broken.status = "archived".to_owned();
    store.seed_document(broken).expect("seed should succeed");

    let tasks = store.fetch_all().await.expect("fetch should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title()).collect();

    assert_eq!(titles, vec!["Wellformed"]);
}
