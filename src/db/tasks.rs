use super::blob::BlobStore;
use crate::libs::error::{PersistenceError, PersistenceResult};
use crate::libs::task::Task;
use tracing::debug;

/// Key the task list is stored under.
pub const TASKS_KEY: &str = "tasks";

/// Snapshot persistence of the task list.
///
/// Each save serializes the full list as a JSON array and replaces the blob
/// under [`TASKS_KEY`]; there are no incremental writes.
pub struct Tasks<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> Tasks<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    /// Writes the whole task list.
    pub fn save(&mut self, tasks: &[Task]) -> PersistenceResult<()> {
        let encoded = serde_json::to_string(tasks).map_err(PersistenceError::Encode)?;
        self.blobs.set(TASKS_KEY, &encoded).map_err(|e| PersistenceError::io(TASKS_KEY, e))?;
        debug!(count = tasks.len(), key = TASKS_KEY, "tasks saved");
        Ok(())
    }

    /// Reads the task list, returning an empty list when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] when the stored blob cannot be
    /// decoded and [`PersistenceError::Io`] when the store cannot be read.
    pub fn load(&self) -> PersistenceResult<Vec<Task>> {
        let Some(raw) = self.load_raw()? else {
            debug!(key = TASKS_KEY, "no stored tasks");
            return Ok(Vec::new());
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|source| PersistenceError::Corrupt {
            key: TASKS_KEY.to_string(),
            source,
        })?;
        debug!(count = tasks.len(), key = TASKS_KEY, "tasks loaded");
        Ok(tasks)
    }

    /// The stored blob exactly as written.
    pub fn load_raw(&self) -> PersistenceResult<Option<String>> {
        self.blobs.get(TASKS_KEY).map_err(|e| PersistenceError::io(TASKS_KEY, e))
    }

    /// Copies an undecodable blob aside so a later save cannot destroy it.
    ///
    /// Returns the key the copy was written under.
    pub fn backup_corrupt(&mut self, raw: &str, stamp_millis: i64) -> PersistenceResult<String> {
        let key = format!("{}.corrupt-{}", TASKS_KEY, stamp_millis);
        self.blobs.set(&key, raw).map_err(|e| PersistenceError::io(&key, e))?;
        Ok(key)
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }
}
