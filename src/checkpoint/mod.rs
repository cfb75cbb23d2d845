//! Persistence of battle snapshots.
//!
//! A snapshot is saved as a versioned [`Checkpoint`] (JSON for storage, binary
//! where compactness matters). The undo stack is working memory and is never
//! written. Restoring never fails: absent, undecodable or invalid data falls
//! back to the initial state according to the [`SnapshotRules`] in use.

use crate::core::GameState;
use crate::enforcement::SnapshotRules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
pub mod store;

pub use error::CheckpointError;
pub use store::{FileStore, MemoryStore, SnapshotStore};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Key the current battle is stored under.
pub const STORAGE_KEY: &str = "dnd-battle-tracker";

/// Serializable checkpoint of a battle snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The snapshot, with an empty undo stack
    pub state: GameState,
}

impl Checkpoint {
    /// Capture `state` as a new checkpoint.
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: state.without_undo(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(raw)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

/// Decode a stored document: either a checkpoint or a bare snapshot.
pub fn decode_state(raw: &str) -> Result<GameState, CheckpointError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;

    if value.get("version").is_some() {
        let checkpoint: Checkpoint = serde_json::from_value(value)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        return checkpoint.check_version().map(Checkpoint::into_state);
    }

    serde_json::from_value(value).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
}

/// Load the snapshot stored under `key`, falling back to the initial state
/// when nothing usable is stored.
pub fn restore<S>(store: &S, key: &str, rules: &SnapshotRules) -> GameState
where
    S: SnapshotStore + ?Sized,
{
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored snapshot, starting fresh");
            return GameState::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored snapshot");
            return GameState::new();
        }
    };

    match decode_state(&raw) {
        Ok(state) => {
            tracing::debug!(key, round = state.current_round, "restored snapshot");
            rules.resolve(state)
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding undecodable snapshot");
            GameState::new()
        }
    }
}

/// Write `state` under `key` as a checkpoint.
pub fn persist<S>(store: &S, key: &str, state: &GameState) -> Result<(), CheckpointError>
where
    S: SnapshotStore + ?Sized,
{
    let json = Checkpoint::capture(state).to_json()?;
    store.save(key, &json)?;
    tracing::debug!(key, round = state.current_round, "persisted snapshot");
    Ok(())
}
