//! Task store: canonical sequence ownership and slot synchronization.
//!
//! # Responsibility
//! - Own the ordered task sequence (newest first) and enforce its
//!   invariants.
//! - Mirror every mutation to the persistent slot before returning.
//! - Serve pure filtered/stats/export reads.
//!
//! # Invariants
//! - `id` is unique across the sequence at all times.
//! - Order is insertion order (reverse-chronological); no operation
//!   re-sorts by another key.
//! - A failed mutation leaves the in-memory sequence untouched.

use crate::model::task::{Filter, Task, TaskId, TaskStats, TaskValidationError};
use crate::slot::{SlotError, TaskSlot};
use chrono::Utc;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default file name for the export artifact.
pub const EXPORT_FILE_NAME: &str = "todo-tasks.json";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for task operations.
///
/// Every variant is recoverable; none is fatal to the session.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    Slot(SlotError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Slot(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "task sequence encoding failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Slot(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Collision-free id generator with time-based flavor.
///
/// Issues `max(now_millis, last + 1)` so rapid successive calls stay
/// unique and ids remain monotonic across a reload.
#[derive(Debug, Default)]
struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    fn seeded_past(tasks: &[Task]) -> Self {
        Self {
            last: tasks.iter().map(|task| task.id).max().unwrap_or(0),
        }
    }

    fn next(&mut self) -> TaskId {
        // A slot can legally decode a task with id == u64::MAX; saturate
        // instead of overflowing past the ceiling.
        let now = Utc::now().timestamp_millis().max(0) as TaskId;
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}

/// Owning collection and sole mutator of all tasks.
///
/// Constructed by loading from the persistent slot; destroyed
/// implicitly when the session ends. There is no explicit teardown.
pub struct TaskStore<S: TaskSlot> {
    tasks: Vec<Task>,
    slot: S,
    ids: IdGenerator,
}

impl<S: TaskSlot> TaskStore<S> {
    /// Opens a store over the given slot.
    ///
    /// An absent, unreadable or undecodable slot recovers to an empty
    /// sequence with a warn-level log event. Slot corruption must never
    /// take the session down.
    pub fn open(slot: S) -> Self {
        let tasks = match slot.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Task>>(&payload) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=store_open module=store status=recovered error_code=slot_decode_failed error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=store_open module=store status=recovered error_code=slot_read_failed error={err}"
                );
                Vec::new()
            }
        };
        debug!("event=store_open module=store status=ok tasks={}", tasks.len());

        let ids = IdGenerator::seeded_past(&tasks);
        Self { tasks, slot, ids }
    }

    /// Adds a pending task at the front of the sequence and persists.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `text` trims to empty; nothing is
    ///   mutated or persisted in that case.
    pub fn add(&mut self, text: &str) -> StoreResult<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText.into());
        }

        let task = Task::new(self.ids.next(), trimmed);
        let mut next = self.tasks.clone();
        next.insert(0, task.clone());
        self.commit(next)?;
        debug!("event=task_add module=store status=ok id={}", task.id);
        Ok(task)
    }

    /// Flips the completion flag of one task and persists.
    ///
    /// The task record is replaced by a copy with the flipped flag; no
    /// other field changes.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.index_of(id)?;
        let updated = self.tasks[index].toggled();
        let mut next = self.tasks.clone();
        next[index] = updated.clone();
        self.commit(next)?;
        debug!(
            "event=task_toggle module=store status=ok id={id} completed={}",
            updated.completed
        );
        Ok(updated)
    }

    /// Removes one task from the sequence and persists.
    ///
    /// The removal is synchronous and immediate; any deletion animation
    /// delay is the caller's business, never a store property.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit(next)?;
        debug!("event=task_delete module=store status=ok id={id}");
        Ok(())
    }

    /// Empties the sequence and persists.
    ///
    /// User confirmation is the caller's concern; the store never
    /// prompts.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.commit(Vec::new())?;
        debug!("event=task_clear module=store status=ok");
        Ok(())
    }

    /// Returns the subset matching `filter`, insertion order preserved.
    /// Pure read; no mutation, no persistence.
    pub fn filtered_view(&self, filter: Filter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// Returns counters over the full sequence. Pure read.
    pub fn stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }

    /// Serializes the full sequence (never the filtered view) as a
    /// pretty-printed backup payload. Pure read.
    pub fn export_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }

    /// Read access to the full sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Read access to the underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    fn index_of(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| {
                warn!(
                    "event=task_lookup module=store status=error error_code=task_not_found id={id}"
                );
                StoreError::NotFound(id)
            })
    }

    /// Persists `next` and only then makes it the in-memory sequence, so
    /// a failed write leaves the observable store exactly as it was.
    fn commit(&mut self, next: Vec<Task>) -> StoreResult<()> {
        let payload = serde_json::to_string(&next)?;
        self.slot.write(&payload)?;
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::IdGenerator;
    use crate::model::task::Task;

    #[test]
    fn id_generator_is_strictly_increasing_under_rapid_calls() {
        let mut ids = IdGenerator::default();
        let mut previous = 0;
        for _ in 0..1000 {
            let id = ids.next();
            assert!(id > previous, "id {id} not greater than {previous}");
            previous = id;
        }
    }

    #[test]
    fn id_generator_seeds_past_loaded_ids() {
        // A far-future id must not be reissued after a reload.
        let far_future = u64::MAX - 10;
        let tasks = vec![Task::new(far_future, "loaded")];
        let mut ids = IdGenerator::seeded_past(&tasks);
        assert_eq!(ids.next(), far_future + 1);
    }

    #[test]
    fn id_generator_saturates_at_the_id_ceiling() {
        let tasks = vec![Task::new(u64::MAX, "ceiling")];
        let mut ids = IdGenerator::seeded_past(&tasks);
        assert_eq!(ids.next(), u64::MAX);
    }

    #[test]
    fn id_generator_seeds_to_zero_for_empty_sequence() {
        let ids = IdGenerator::seeded_past(&[]);
        assert_eq!(ids.last, 0);
    }
}
