//! Board statistics for the progress side panel.

use super::{Task, TaskPriority, TaskStatus};

/// Number of tasks per urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    /// Tasks with high priority.
    pub high: usize,
    /// Tasks with medium priority.
    pub medium: usize,
    /// Tasks with low priority.
    pub low: usize,
}

/// Aggregate completion and priority statistics over the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    total: usize,
    completed: usize,
    priorities: PriorityCounts,
}

impl BoardStats {
    /// Computes statistics over the full (unfiltered) task collection.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            if task.status() == TaskStatus::Done {
                stats.completed += 1;
            }
            match task.priority() {
                TaskPriority::High => stats.priorities.high += 1,
                TaskPriority::Medium => stats.priorities.medium += 1,
                TaskPriority::Low => stats.priorities.low += 1,
            }
        }
        stats
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of tasks in the `done` column.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the per-priority task counts.
    #[must_use]
    pub const fn priorities(&self) -> PriorityCounts {
        self.priorities
    }

    /// Returns the completion percentage, rounded to the nearest integer.
    ///
    /// An empty board reports zero percent.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "round-half-up integer arithmetic avoids float progress values"
    )]
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (self.completed * 200 + self.total) / (self.total * 2);
        u8::try_from(rounded).unwrap_or(100)
    }
}
