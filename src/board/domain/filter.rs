//! View projection: search and priority filtering.

use super::{ParsePriorityError, Task, TaskPriority};

/// Priority filter applied to the board view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority passes.
    #[default]
    All,
    /// Only tasks with the given priority pass.
    Only(TaskPriority),
}

impl PriorityFilter {
    /// Returns `true` when the given priority passes the filter.
    #[must_use]
    pub fn matches(self, priority: TaskPriority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(Self::Only(TaskPriority::try_from(value)?))
    }
}

/// Combined search term and priority filter for the board view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: String,
    priority: PriorityFilter,
}

impl TaskFilter {
    /// Creates a filter that passes every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Replaces the search term in place.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Replaces the priority filter in place.
    pub const fn set_priority(&mut self, priority: PriorityFilter) {
        self.priority = priority;
    }

    /// Returns the current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the current priority filter.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns `true` when the task passes both the priority filter and the
    /// case-insensitive search over title and description.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.priority.matches(task.priority()) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task.description().to_lowercase().contains(&needle)
    }
}

/// Projects the full collection down to the tasks passing `filter`.
///
/// Pure and deterministic: survivors keep their relative order, and an empty
/// input yields an empty output.
#[must_use]
pub fn project(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}
