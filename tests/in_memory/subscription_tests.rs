//! Integration tests for snapshot delivery and subscription teardown.

use super::helpers::{TestStore, day, document, draft, store};
use corkboard::board::{
    domain::{TaskPriority, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscription_receives_snapshot_after_mutation(store: Arc<TestStore>) {
    let mut subscription = store.subscribe();
    assert!(subscription.current().is_empty());

    let id = store
        .add(&draft("Implement Authentication", TaskStatus::InProgress))
        .await
        .expect("add should succeed");

    let snapshot = subscription
        .next_snapshot()
        .await
        .expect("snapshot should arrive");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.first().map(corkboard::board::domain::Task::id), Some(id));

    subscription.unsubscribe();
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn late_subscriber_sees_current_collection_immediately(store: Arc<TestStore>) {
    store
        .seed_document(document(
            "Seeded before subscribing",
            TaskStatus::Todo,
            TaskPriority::Low,
            day(11),
        ))
        .expect("seed should succeed");

    let mut subscription = store.subscribe();

    assert_eq!(subscription.current().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_the_store_loses_the_subscription() {
    let solo_store = TestStore::new();
    let mut subscription = solo_store.subscribe();
    drop(solo_store);

    let result = subscription.next_snapshot().await;

    assert!(matches!(result, Err(TaskStoreError::SubscriptionLost)));
}
