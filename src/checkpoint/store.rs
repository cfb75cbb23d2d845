//! Key-value stores for serialized snapshots.

use crate::checkpoint::error::CheckpointError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Durable key-value storage for serialized snapshots.
pub trait SnapshotStore: Send + Sync {
    /// Read the value under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, CheckpointError>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), CheckpointError>;

    /// Delete the value under `key`; absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), CheckpointError>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, CheckpointError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CheckpointError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CheckpointError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CheckpointError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CheckpointError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CheckpointError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key in a base directory.
///
/// Writes go to a temporary file first and are moved into place with a
/// rename, so a crash never leaves a half-written snapshot behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, CheckpointError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CheckpointError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !valid {
            return Err(CheckpointError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, CheckpointError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        tracing::debug!("Loaded snapshot from {}", path.display());
        Ok(Some(raw))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CheckpointError> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved snapshot to {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CheckpointError> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Removed snapshot {}", path.display());
        }
        Ok(())
    }
}
