//! File-backed slot implementation.
//!
//! # Responsibility
//! - Map the slot contract onto a single file path.
//! - Keep whole-value replacement crash-safe.
//!
//! # Invariants
//! - A reader sees either the previous payload or the new one, never a
//!   partially written file.
//! - A missing file reads as an absent slot, not an error.

use super::{SlotResult, TaskSlot};
use log::{debug, error};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slot stored as one file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot over `path`. The file does not need to exist yet;
    /// parent directories are created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("slot"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TaskSlot for FileSlot {
    fn read(&self) -> SlotResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                error!(
                    "event=slot_read module=slot status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }

    fn write(&mut self, payload: &str) -> SlotResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // Why: write-then-rename keeps the whole-value-replace contract
        // even if the process dies between the two filesystem calls.
        let temp = self.temp_path();
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        debug!(
            "event=slot_write module=slot status=ok bytes={}",
            payload.len()
        );
        Ok(())
    }
}
