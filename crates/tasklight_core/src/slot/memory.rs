//! In-memory slot implementation.
//!
//! The counterpart of the file slot for tests and ephemeral sessions,
//! playing the same role an in-memory database does for SQL-backed
//! stores.

use super::{SlotResult, TaskSlot};

/// Slot held in process memory; nothing survives the session.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// Creates an empty, never-written slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with a payload, as if previously written.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            value: Some(payload.into()),
        }
    }
}

impl TaskSlot for MemorySlot {
    fn read(&self) -> SlotResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, payload: &str) -> SlotResult<()> {
        self.value = Some(payload.to_string());
        Ok(())
    }
}
