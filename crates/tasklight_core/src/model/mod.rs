//! Domain model for the task list.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation and view predicates next to the data they govern.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is hard removal; there is no tombstone state.

pub mod task;
