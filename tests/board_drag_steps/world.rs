//! Shared world state for drag-and-drop behaviour scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use corkboard::board::{
    adapters::InMemoryTaskStore,
    domain::{Task, TaskId},
    ports::{TaskStore, TaskSubscription},
    services::{BoardController, BoardError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestStore = InMemoryTaskStore<DefaultClock>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub store: Arc<TestStore>,
    pub controller: BoardController<TestStore>,
    pub subscription: TaskSubscription,
    pub ids_by_title: HashMap<String, TaskId>,
    pub baseline: Vec<Task>,
    pub last_drag_result: Option<Result<(), BoardError>>,
}

impl BoardWorld {
    /// Creates a world with an empty store and board.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let controller = BoardController::new(Arc::clone(&store));
        let subscription = store.subscribe();
        Self {
            store,
            controller,
            subscription,
            ids_by_title: HashMap::new(),
            baseline: Vec::new(),
            last_drag_result: None,
        }
    }

    /// Looks up a seeded task id by its scenario title.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.ids_by_title
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown scenario task title: {title}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
