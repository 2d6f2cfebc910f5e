//! Task board management for Corkboard.
//!
//! This module implements the board core: the validated task model, the pure
//! view-derivation functions (search/priority projection and per-column
//! grouping with stable sorts), the drag-end reconciler that turns a completed
//! drag gesture into a new collection plus at most one store mutation, and the
//! lifecycle controller that reconciles optimistic local state with the
//! store's authoritative snapshots. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
