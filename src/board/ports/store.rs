//! Store port for task persistence and push-based snapshot notification.

use crate::board::domain::{Task, TaskDraft, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence and notification contract.
///
/// The store is the system of record: identifiers and timestamps are assigned
/// remotely, and their effects become visible through snapshots rather than
/// synchronously after a write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task and returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] on network or permission failure.
    async fn add(&self, draft: &TaskDraft) -> TaskStoreResult<TaskId>;

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist or
    /// [`TaskStoreError::Backend`] on network or permission failure.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist or
    /// [`TaskStoreError::Backend`] on network or permission failure.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;

    /// Returns the current collection as a one-time fetch, ordered by
    /// creation timestamp descending.
    ///
    /// A snapshot pushed through [`TaskStore::subscribe`] remains the
    /// authoritative view; this is a convenience for non-subscribing callers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] on network or permission failure.
    async fn fetch_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Removes every task from the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] on network or permission failure.
    async fn clear(&self) -> TaskStoreResult<()>;

    /// Opens a snapshot subscription.
    ///
    /// Each remote mutation pushes the full collection, ordered by creation
    /// timestamp descending. The subscription must be released (dropped or
    /// [`TaskSubscription::unsubscribe`]d) when no longer needed.
    fn subscribe(&self) -> TaskSubscription;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Backend failure (network, permission, storage).
    #[error("store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),

    /// The snapshot stream itself failed; the displayed collection can no
    /// longer be trusted as current.
    #[error("task snapshot subscription lost")]
    SubscriptionLost,
}

impl TaskStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

/// A cancellable stream of authoritative task snapshots.
///
/// Snapshots are yielded in delivery order; intermediate snapshots may be
/// coalesced by the store. Dropping the subscription releases it.
#[derive(Debug)]
pub struct TaskSubscription {
    receiver: watch::Receiver<Vec<Task>>,
}

impl TaskSubscription {
    /// Wraps a snapshot channel receiver.
    #[must_use]
    pub const fn new(receiver: watch::Receiver<Vec<Task>>) -> Self {
        Self { receiver }
    }

    /// Returns the most recently pushed snapshot without waiting.
    #[must_use]
    pub fn current(&mut self) -> Vec<Task> {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits for the next snapshot push.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::SubscriptionLost`] when the store has closed
    /// the stream.
    pub async fn next_snapshot(&mut self) -> TaskStoreResult<Vec<Task>> {
        self.receiver
            .changed()
            .await
            .map_err(|_| TaskStoreError::SubscriptionLost)?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    /// Releases the subscription.
    ///
    /// Equivalent to dropping it; provided so teardown reads explicitly at
    /// call sites.
    pub fn unsubscribe(self) {
        drop(self);
    }
}
