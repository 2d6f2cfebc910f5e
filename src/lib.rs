//! Corkboard: a kanban task board engine.
//!
//! This crate provides the core logic for a three-column task board backed by
//! an external document store with push-based change notification: pure view
//! derivation (search, priority filtering, per-column sorting), drag-end
//! reconciliation of task order and status, and an optimistic task lifecycle
//! controller.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (document store, etc.)
//!
//! # Modules
//!
//! - [`board`]: Task board domain, store port, adapters, and controller

pub mod board;
