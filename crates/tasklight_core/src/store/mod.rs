//! Store layer owning the canonical task sequence.
//!
//! # Responsibility
//! - Orchestrate mutations, reads and slot synchronization.
//! - Return semantic errors (`NotFound`, `Validation`) in addition to
//!   slot transport errors.
//!
//! # Invariants
//! - Every mutating operation persists the full sequence before
//!   returning.

pub mod task_store;
