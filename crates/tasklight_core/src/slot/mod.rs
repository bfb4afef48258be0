//! Persistent slot contract and implementations.
//!
//! # Responsibility
//! - Define the single key-value slot holding the encoded task sequence.
//! - Provide file-backed and in-memory slot implementations.
//!
//! # Invariants
//! - Writes replace the whole slot value; a partial payload is never
//!   observable, even across a crash mid-write.
//! - A slot that has never been written reads as `None`, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Transport error for slot reads and writes.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot io failure: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Contract for the single durable key-value location holding the
/// serialized task sequence across sessions.
pub trait TaskSlot {
    /// Reads the current slot value; `None` when the slot is absent.
    fn read(&self) -> SlotResult<Option<String>>;

    /// Replaces the slot value wholesale.
    fn write(&mut self, payload: &str) -> SlotResult<()>;
}
