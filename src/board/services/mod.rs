//! Orchestration services for the task board.

mod controller;

pub use controller::{BoardController, BoardError, BoardResult, DeleteConfirmation, DragPhase};
