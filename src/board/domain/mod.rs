//! Domain model for the task board.
//!
//! The board domain models validated tasks, the pure view pipeline (filter
//! projection, column grouping, sorting), drag-end reconciliation, and board
//! statistics while keeping all infrastructure concerns outside of the domain
//! boundary.

mod columns;
mod drag;
mod error;
mod filter;
mod ids;
mod stats;
mod task;

pub use columns::{BoardColumns, SortKey, group};
pub use drag::{DragEnd, DragLocation, DragOutcome, StatusChange, reconcile};
pub use error::{
    BoardDomainError, ParsePriorityError, ParseSortKeyError, ParseStatusError,
};
pub use filter::{PriorityFilter, TaskFilter, project};
pub use ids::TaskId;
pub use stats::{BoardStats, PriorityCounts};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};
