//! Port contracts for task persistence and change notification.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! controller.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult, TaskSubscription};
