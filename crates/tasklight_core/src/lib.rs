//! Core domain logic for Tasklight.
//! This crate is the single source of truth for task-list invariants.

pub mod logging;
pub mod model;
pub mod slot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Filter, Task, TaskId, TaskStats, TaskValidationError, UnknownFilter};
pub use slot::{FileSlot, MemorySlot, SlotError, SlotResult, TaskSlot};
pub use store::task_store::{StoreError, StoreResult, TaskStore, EXPORT_FILE_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
