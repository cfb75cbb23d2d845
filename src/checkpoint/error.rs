//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint and store operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Storage keys must be non-empty and free of path separators
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A store's lock was poisoned by a panicking writer
    #[error("Store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
