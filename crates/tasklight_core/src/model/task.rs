//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its wire encoding.
//! - Provide the read-only filter and stats projections.
//!
//! # Invariants
//! - `id` is unique within a store and never reused.
//! - `text` is non-empty after trimming and never edited afterwards.
//! - `created_at` is immutable once assigned; nothing sorts on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable integer identifier for a task, monotonic by creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// A single to-do entry.
///
/// Identity (`id`, `text`, `created_at`) is fixed at creation; only the
/// completion flag changes afterwards, and only through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id assigned at creation, never reused or changed.
    pub id: TaskId,
    /// Display text, trimmed at creation. There is no edit operation.
    pub text: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
    /// Creation timestamp, record-keeping only.
    /// Serialized as `createdAt` to match the external slot schema.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task from already-validated text.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - Callers are responsible for trimming and id uniqueness.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this task with the completion flag flipped.
    ///
    /// Toggling is expressed as record replacement, keeping mutation
    /// sites explicit and equality-based tests straightforward.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Model-level validation failure for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Read-only view selector over the task sequence.
///
/// Session state only; it is never persisted and resets to `All` on
/// every fresh load. Selecting a view never mutates stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks with `completed == true`.
    Completed,
    /// Tasks with `completed == false`.
    Pending,
}

impl Filter {
    /// Returns whether `task` belongs to this view.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Error for unrecognized filter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl Display for UnknownFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|completed|pending",
            self.0
        )
    }
}

impl Error for UnknownFilter {}

/// Aggregate counters over the full task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Count of all tasks, regardless of view.
    pub total: usize,
    /// Count of tasks with `completed == true`.
    pub completed: usize,
}
