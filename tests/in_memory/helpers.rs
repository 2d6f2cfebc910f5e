//! Shared test helpers for in-memory store integration tests.

use chrono::{DateTime, TimeZone, Utc};
use corkboard::board::{
    adapters::{InMemoryTaskStore, TaskDocument},
    domain::{TaskDraft, TaskId, TaskPriority, TaskStatus},
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Store type used across the integration suites.
pub type TestStore = InMemoryTaskStore<DefaultClock>;

/// Provides an empty store on the system clock.
#[fixture]
pub fn store() -> Arc<TestStore> {
    Arc::new(InMemoryTaskStore::new())
}

/// A fixed timestamp on the given January 2024 day.
pub fn day(day_of_month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day_of_month, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Builds a well-formed raw document with an explicit creation timestamp.
pub fn document(
    title: &str,
    status: TaskStatus,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
) -> TaskDocument {
    TaskDocument {
        id: TaskId::new().to_string(),
        title: title.to_owned(),
        description: String::new(),
        status: status.as_str().to_owned(),
        priority: priority.as_str().to_owned(),
        created_at,
        updated_at: None,
    }
}

/// Builds a valid draft with the given title and column.
pub fn draft(title: &str, status: TaskStatus) -> TaskDraft {
    TaskDraft::new(title)
        .expect("valid draft title")
        .with_status(status)
}
