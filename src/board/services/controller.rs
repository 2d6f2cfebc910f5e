//! Board controller: canonical collection owner and lifecycle orchestration.
//!
//! The controller is the single writer of the in-memory task collection. It
//! overwrites that collection wholesale whenever the store pushes a snapshot,
//! applies drag results optimistically before their store mutation resolves,
//! and gates destructive deletion behind an explicit confirmation token. All
//! derived views (filter projection, column grouping, statistics) are pure
//! reads recomputed on demand.

use std::sync::Arc;

use crate::board::{
    domain::{
        BoardColumns, BoardDomainError, BoardStats, DragEnd, DragOutcome, PriorityFilter,
        SortKey, Task, TaskDraft, TaskFilter, TaskId, TaskPatch, group, project, reconcile,
    },
    ports::{TaskStore, TaskStoreError, TaskSubscription},
};
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

impl BoardError {
    /// Returns `true` when the error invalidates the displayed collection.
    ///
    /// Only a lost snapshot subscription is fatal to the view; every other
    /// failure is surfaced as a non-fatal notification while local state
    /// self-corrects on the next snapshot.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Store(TaskStoreError::SubscriptionLost))
    }
}

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Phase of the current drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag is underway.
    #[default]
    Idle,
    /// A task is being dragged; per-column sorting is suspended.
    Dragging,
}

/// Token produced by [`BoardController::request_delete`].
///
/// Deletion only proceeds when the token is passed back to
/// [`BoardController::confirm_delete`]; handing it to
/// [`BoardController::decline_delete`] discards it without side effects. The
/// token is deliberately not constructible elsewhere, so no presentation
/// layer can skip the confirmation step.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a delete confirmation must be confirmed or declined"]
pub struct DeleteConfirmation {
    task_id: TaskId,
}

impl DeleteConfirmation {
    /// Returns the task the confirmation refers to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// Task board orchestration service.
pub struct BoardController<S: TaskStore> {
    store: Arc<S>,
    tasks: Vec<Task>,
    filter: TaskFilter,
    sort: SortKey,
    drag: DragPhase,
    editing: Option<TaskId>,
}

impl<S: TaskStore> BoardController<S> {
    /// Creates a controller over the given store with an empty collection.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            filter: TaskFilter::new(),
            sort: SortKey::default(),
            drag: DragPhase::Idle,
            editing: None,
        }
    }

    /// Returns the canonical task collection.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Overwrites the collection with an authoritative store snapshot.
    ///
    /// Snapshots always win: an optimistic effect of a still-pending mutation
    /// may be transiently clobbered here and re-applied once the store's own
    /// update round-trips back through a later snapshot.
    pub fn apply_snapshot(&mut self, snapshot: Vec<Task>) {
        self.tasks = snapshot;
    }

    /// Awaits the next snapshot push and applies it.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`TaskStoreError::SubscriptionLost`] when the
    /// snapshot stream has closed.
    pub async fn sync(&mut self, subscription: &mut TaskSubscription) -> BoardResult<()> {
        let snapshot = subscription.next_snapshot().await?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Sets the view search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    /// Sets the view priority filter.
    pub const fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.filter.set_priority(priority);
    }

    /// Sets the per-column sort key.
    pub const fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Returns the render-ready columns for the current view settings.
    ///
    /// While a drag is underway the active sort is suspended so the column
    /// the user is manipulating keeps its current order.
    #[must_use]
    pub fn columns(&self) -> BoardColumns {
        let filtered = project(&self.tasks, &self.filter);
        let sort = match self.drag {
            DragPhase::Dragging => None,
            DragPhase::Idle => Some(self.sort),
        };
        group(&filtered, sort)
    }

    /// Returns completion and priority statistics over the full collection.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(&self.tasks)
    }

    /// Marks a drag gesture as started, suspending per-column sorting.
    pub const fn begin_drag(&mut self) {
        self.drag = DragPhase::Dragging;
    }

    /// Returns `true` while a drag gesture is underway.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging)
    }

    /// Completes a drag gesture.
    ///
    /// The reconciled collection is applied optimistically before the store
    /// mutation is issued; a store failure leaves the optimistic state in
    /// place (it self-corrects on the next snapshot) and is surfaced to the
    /// caller as a non-fatal notification.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the status write-back fails.
    pub async fn finish_drag(&mut self, drag: DragEnd) -> BoardResult<()> {
        self.drag = DragPhase::Idle;
        match reconcile(&self.tasks, &drag) {
            DragOutcome::Cancelled | DragOutcome::Unchanged => {
                tracing::debug!(task_id = %drag.task_id, "drag gesture resolved as a no-op");
                Ok(())
            }
            DragOutcome::Reordered(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            DragOutcome::Moved { tasks, change } => {
                tracing::debug!(
                    task_id = %change.task_id,
                    status = change.status.as_str(),
                    "committing cross-column move"
                );
                self.tasks = tasks;
                let patch = TaskPatch::new().with_status(change.status);
                self.store.update(change.task_id, &patch).await?;
                Ok(())
            }
        }
    }

    /// Creates a new task.
    ///
    /// The local collection is not touched: the created task appears when the
    /// store pushes its next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store rejects the write.
    pub async fn create(&self, draft: TaskDraft) -> BoardResult<TaskId> {
        let id = self.store.add(&draft).await?;
        Ok(id)
    }

    /// Opens an edit draft for the given task.
    pub const fn begin_edit(&mut self, id: TaskId) {
        self.editing = Some(id);
    }

    /// Returns the task currently being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Abandons the current edit draft.
    pub const fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submits the current edit draft as a partial update.
    ///
    /// The edit draft is cleared whether the store accepts the update or not;
    /// a failure still surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoEditInProgress`] when no edit is open,
    /// or [`BoardError::Store`] when the store rejects the update.
    pub async fn submit_edit(&mut self, patch: TaskPatch) -> BoardResult<()> {
        let id = self
            .editing
            .take()
            .ok_or(BoardDomainError::NoEditInProgress)?;
        self.store.update(id, &patch).await?;
        Ok(())
    }

    /// Requests deletion of a task, returning the confirmation token the
    /// caller must resolve.
    pub const fn request_delete(&self, id: TaskId) -> DeleteConfirmation {
        DeleteConfirmation { task_id: id }
    }

    /// Confirms a requested deletion and forwards it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store rejects the deletion.
    pub async fn confirm_delete(&self, confirmation: DeleteConfirmation) -> BoardResult<()> {
        self.store.delete(confirmation.task_id).await?;
        Ok(())
    }

    /// Declines a requested deletion.
    ///
    /// A total no-op: the collection and the store are left untouched.
    pub fn decline_delete(&self, confirmation: DeleteConfirmation) {
        tracing::debug!(task_id = %confirmation.task_id, "deletion declined");
        drop(confirmation);
    }
}
