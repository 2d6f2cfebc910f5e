//! Raw task documents as stored remotely, with validated decoding.
//!
//! The remote store holds loosely-shaped records; nothing guarantees that
//! every document carries the fields the board relies on. Decoding validates
//! each record into a domain [`Task`] and drops malformed entries from the
//! snapshot with a structured warning instead of trusting their shape
//! implicitly.

use crate::board::domain::{
    ParsePriorityError, ParseStatusError, PersistedTaskData, Task, TaskDraft, TaskId, TaskPatch,
    TaskPriority, TaskStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Wire representation of a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDocument {
    /// Store-assigned document identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Column name (`todo`, `in-progress`, `done`).
    pub status: String,
    /// Priority name (`low`, `medium`, `high`).
    pub priority: String,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Store-assigned latest update timestamp, if any.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Errors found while validating a task document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The document id is not a valid task identifier.
    #[error("invalid document id: {0}")]
    InvalidId(String),

    /// The document title is empty after trimming.
    #[error("document title must not be empty")]
    EmptyTitle,

    /// The status field names no known column.
    #[error(transparent)]
    UnknownStatus(#[from] ParseStatusError),

    /// The priority field names no known urgency level.
    #[error(transparent)]
    UnknownPriority(#[from] ParsePriorityError),
}

impl TaskDocument {
    /// Builds the document stored for a newly created task.
    #[must_use]
    pub fn from_draft(draft: &TaskDraft, id: TaskId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            status: draft.status().as_str().to_owned(),
            priority: draft.priority().as_str().to_owned(),
            created_at,
            updated_at: None,
        }
    }

    /// Applies a partial update to the stored fields.
    pub fn apply_patch(&mut self, patch: &TaskPatch, updated_at: DateTime<Utc>) {
        if let Some(title) = patch.title() {
            self.title = title.to_owned();
        }
        if let Some(description) = patch.description() {
            self.description = description.to_owned();
        }
        if let Some(status) = patch.status() {
            self.status = status.as_str().to_owned();
        }
        if let Some(priority) = patch.priority() {
            self.priority = priority.as_str().to_owned();
        }
        self.updated_at = Some(updated_at);
    }

    /// Validates the document into a domain task.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] when the id, title, status, or priority is
    /// malformed.
    pub fn decode(&self) -> Result<Task, DocumentError> {
        let uuid = Uuid::parse_str(&self.id)
            .map_err(|_| DocumentError::InvalidId(self.id.clone()))?;
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DocumentError::EmptyTitle);
        }
        let status = TaskStatus::try_from(self.status.as_str())?;
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(uuid),
            title: title.to_owned(),
            description: self.description.clone(),
            status,
            priority,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}

/// Decodes a pushed snapshot, dropping malformed documents.
///
/// Rejected entries are logged at warn level with their id and the validation
/// failure; the rest of the snapshot is unaffected.
#[must_use]
pub fn decode_snapshot(documents: &[TaskDocument]) -> Vec<Task> {
    documents
        .iter()
        .filter_map(|document| match document.decode() {
            Ok(task) => Some(task),
            Err(error) => {
                tracing::warn!(
                    id = %document.id,
                    %error,
                    "dropping malformed task document from snapshot"
                );
                None
            }
        })
        .collect()
}
