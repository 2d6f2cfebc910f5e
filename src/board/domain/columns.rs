//! Column grouping and per-column sorting.

use super::{ParseSortKeyError, Task, TaskStatus};

/// Sort key applied independently to each column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive title, ascending.
    #[default]
    Title,
    /// Priority weight, descending (high first).
    Priority,
    /// Creation timestamp, descending (newest first).
    Date,
}

impl SortKey {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Priority => "priority",
            Self::Date => "date",
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseSortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            "date" => Ok(Self::Date),
            _ => Err(ParseSortKeyError(value.to_owned())),
        }
    }
}

/// The three status partitions of the board, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    /// Tasks in the `todo` column.
    pub todo: Vec<Task>,
    /// Tasks in the `in-progress` column.
    pub in_progress: Vec<Task>,
    /// Tasks in the `done` column.
    pub done: Vec<Task>,
}

impl BoardColumns {
    /// Returns the ordered tasks of the given column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the total number of tasks across all three columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }
}

/// Partitions tasks by status and sorts each column independently.
///
/// `sort` is `None` while a drag gesture is in progress: each partition is
/// returned in its current collection order so the list the user is
/// manipulating does not jump mid-gesture. All sorts are stable; priority and
/// date sorts have frequent ties and instability causes visible flicker.
#[must_use]
pub fn group(tasks: &[Task], sort: Option<SortKey>) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in tasks {
        columns.column_mut(task.status()).push(task.clone());
    }
    if let Some(key) = sort {
        for status in TaskStatus::ALL {
            sort_column(columns.column_mut(status), key);
        }
    }
    columns
}

fn sort_column(column: &mut [Task], key: SortKey) {
    match key {
        SortKey::Title => {
            column.sort_by(|a, b| a.title().to_lowercase().cmp(&b.title().to_lowercase()));
        }
        SortKey::Priority => column.sort_by(|a, b| b.priority().cmp(&a.priority())),
        SortKey::Date => column.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
    }
}
