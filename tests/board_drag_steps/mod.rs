//! Step definitions for the drag-and-drop behaviour scenarios.

pub mod then;
pub mod world;
