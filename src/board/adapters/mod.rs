//! Adapter implementations of the board ports.

pub mod document;
pub mod memory;

pub use document::{DocumentError, TaskDocument, decode_snapshot};
pub use memory::InMemoryTaskStore;
