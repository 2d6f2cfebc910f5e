//! Drag-end reconciliation: turning a completed drag gesture into a new task
//! collection and at most one store mutation.

use super::{Task, TaskId, TaskStatus};

/// A position within a column: the column itself and the index inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    /// Column the position belongs to.
    pub column: TaskStatus,
    /// Zero-based index within the column's ordered sequence.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location from a column and index.
    #[must_use]
    pub const fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// A completed drag gesture.
///
/// `destination` is `None` when the task was released outside any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    /// Identifier of the dragged task.
    pub task_id: TaskId,
    /// Position the drag started from.
    pub source: DragLocation,
    /// Position the task was dropped at, if any.
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    /// Creates a completed gesture description.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Self {
        Self {
            task_id,
            source,
            destination,
        }
    }
}

/// The single store mutation a cross-column move produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// Task whose status must be written back.
    pub task_id: TaskId,
    /// Column the task moved into.
    pub status: TaskStatus,
}

/// Result of reconciling a completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The gesture had no destination or the task vanished mid-drag; the
    /// collection is unchanged and no mutation is issued.
    Cancelled,
    /// The drop landed back on the task's current position; the collection is
    /// unchanged and no mutation is issued.
    Unchanged,
    /// A same-column reorder. Order is display-only and not persisted, so no
    /// mutation is issued; the order is re-derived from the active sort key
    /// on the next snapshot.
    Reordered(Vec<Task>),
    /// A cross-column move: the new collection plus exactly one status
    /// update to issue to the store.
    Moved {
        /// The reconciled task collection.
        tasks: Vec<Task>,
        /// The single status write-back for the moved task.
        change: StatusChange,
    },
}

impl DragOutcome {
    /// Returns `true` when the gesture left the collection untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Unchanged)
    }
}

/// Reconciles a completed drag gesture against the current collection.
///
/// Tolerates eventual consistency: a task id that no longer exists (deleted
/// by another client while the drag was in flight) cancels the gesture rather
/// than failing it, and a destination index beyond the column length is
/// clamped to append-at-end. At most one store mutation is ever produced, and
/// only for a cross-column move.
#[must_use]
pub fn reconcile(tasks: &[Task], drag: &DragEnd) -> DragOutcome {
    let Some(destination) = drag.destination else {
        return DragOutcome::Cancelled;
    };
    if destination == drag.source {
        return DragOutcome::Unchanged;
    }
    if !tasks.iter().any(|task| task.id() == drag.task_id) {
        // Concurrently deleted by another client; benign.
        return DragOutcome::Cancelled;
    }

    if destination.column == drag.source.column {
        reorder_within_column(tasks, drag.task_id, destination)
    } else {
        move_across_columns(tasks, drag.task_id, destination)
    }
}

/// Reorders a task inside its own column, leaving every other column's slots
/// untouched.
fn reorder_within_column(
    tasks: &[Task],
    task_id: TaskId,
    destination: DragLocation,
) -> DragOutcome {
    let mut column: Vec<Task> = tasks
        .iter()
        .filter(|task| task.status() == destination.column)
        .cloned()
        .collect();
    let Some(from) = column.iter().position(|task| task.id() == task_id) else {
        // The task moved out of this column under a concurrent snapshot.
        return DragOutcome::Cancelled;
    };
    let moved = column.remove(from);
    let insert_at = destination.index.min(column.len());
    if insert_at == from {
        // Removal-then-reinsertion arithmetic landed back on the same slot.
        return DragOutcome::Unchanged;
    }
    column.insert(insert_at, moved);

    // Splice the reordered sequence back into the column's original slots.
    let mut reordered = column.into_iter();
    let new_tasks = tasks
        .iter()
        .cloned()
        .map(|task| {
            if task.status() == destination.column {
                reordered.next().unwrap_or(task)
            } else {
                task
            }
        })
        .collect();
    DragOutcome::Reordered(new_tasks)
}

/// Moves a task into another column at the requested index and rebuilds the
/// collection in canonical column order.
fn move_across_columns(tasks: &[Task], task_id: TaskId, destination: DragLocation) -> DragOutcome {
    let mut moved: Option<Task> = None;
    let mut todo = Vec::new();
    let mut in_progress = Vec::new();
    let mut done = Vec::new();
    for task in tasks {
        if task.id() == task_id {
            let mut dragged = task.clone();
            dragged.move_to(destination.column);
            moved = Some(dragged);
            continue;
        }
        match task.status() {
            TaskStatus::Todo => todo.push(task.clone()),
            TaskStatus::InProgress => in_progress.push(task.clone()),
            TaskStatus::Done => done.push(task.clone()),
        }
    }
    let Some(dragged) = moved else {
        return DragOutcome::Cancelled;
    };
    let change = StatusChange {
        task_id,
        status: destination.column,
    };

    let target = match destination.column {
        TaskStatus::Todo => &mut todo,
        TaskStatus::InProgress => &mut in_progress,
        TaskStatus::Done => &mut done,
    };
    let insert_at = destination.index.min(target.len());
    target.insert(insert_at, dragged);

    let mut new_tasks = todo;
    new_tasks.append(&mut in_progress);
    new_tasks.append(&mut done);
    DragOutcome::Moved {
        tasks: new_tasks,
        change,
    }
}
