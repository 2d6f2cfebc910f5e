//! In-memory task store with push-based snapshot notification.
//!
//! Mirrors the remote document store's contract closely enough for tests and
//! local development: identifiers and timestamps are assigned on the store
//! side, every mutation pushes a full snapshot ordered by creation timestamp
//! descending, and raw documents are validated on the way out rather than
//! trusted implicitly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::board::{
    adapters::document::{TaskDocument, decode_snapshot},
    domain::{Task, TaskDraft, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult, TaskSubscription},
};

/// Thread-safe in-memory task store.
pub struct InMemoryTaskStore<C: Clock + Send + Sync> {
    state: Arc<RwLock<HashMap<String, TaskDocument>>>,
    snapshots: watch::Sender<Vec<Task>>,
    clock: Arc<C>,
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Send + Sync> InMemoryTaskStore<C> {
    /// Creates an empty store with the given clock for timestamp assignment.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            snapshots,
            clock,
        }
    }

    /// Inserts a raw document as another writer would store it, bypassing
    /// draft validation, and pushes a snapshot.
    ///
    /// Lets tests exercise the decode path with arbitrarily shaped records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the store lock is poisoned.
    pub fn seed_document(&self, document: TaskDocument) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        state.insert(document.id.clone(), document);
        self.publish(&state);
        Ok(())
    }

    fn read_state(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<String, TaskDocument>>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::backend(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<String, TaskDocument>>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::backend(std::io::Error::other(err.to_string())))
    }

    /// Decodes the current documents into a snapshot ordered by creation
    /// timestamp descending.
    fn snapshot(state: &HashMap<String, TaskDocument>) -> Vec<Task> {
        let mut documents: Vec<TaskDocument> = state.values().cloned().collect();
        documents.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        decode_snapshot(&documents)
    }

    fn publish(&self, state: &HashMap<String, TaskDocument>) {
        self.snapshots.send_replace(Self::snapshot(state));
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskStore for InMemoryTaskStore<C> {
    async fn add(&self, draft: &TaskDraft) -> TaskStoreResult<TaskId> {
        let id = TaskId::new();
        let document = TaskDocument::from_draft(draft, id, self.now());
        let mut state = self.write_state()?;
        state.insert(document.id.clone(), document);
        self.publish(&state);
        Ok(id)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        let now = self.now();
        let mut state = self.write_state()?;
        let document = state
            .get_mut(&id.to_string())
            .ok_or(TaskStoreError::NotFound(id))?;
        document.apply_patch(patch, now);
        self.publish(&state);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        if state.remove(&id.to_string()).is_none() {
            return Err(TaskStoreError::NotFound(id));
        }
        self.publish(&state);
        Ok(())
    }

    async fn fetch_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(Self::snapshot(&state))
    }

    async fn clear(&self) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        state.clear();
        self.publish(&state);
        Ok(())
    }

    fn subscribe(&self) -> TaskSubscription {
        TaskSubscription::new(self.snapshots.subscribe())
    }
}
