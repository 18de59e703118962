//! Task list storage - JSON file persistence

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use super::error::Result;
use super::model::TaskList;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the advisory lock guarding the task file. The guard is held for
    /// a whole load-mutate-save cycle; concurrent invocations block here
    /// instead of racing on the file.
    pub fn lock(&self) -> Result<StorageLock> {
        let lock_path = self.path.with_extension("lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;
        debug!("acquiring lock on {}", lock_path.display());
        file.lock_exclusive()?;
        Ok(StorageLock { file })
    }

    /// Load the task list. A missing or blank file is an empty list, not an
    /// error; unreadable or malformed content is surfaced.
    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(TaskList::new());
        }

        let list: TaskList = serde_json::from_str(&content)?;
        Ok(list)
    }

    /// Write the whole document as pretty-printed JSON.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        // Create backup
        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(list)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Guard for the advisory file lock; released on drop.
pub struct StorageLock {
    file: File,
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
