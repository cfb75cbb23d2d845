//! Engine configuration.

use crate::core::UNDO_LIMIT;
use serde::{Deserialize, Serialize};

/// How HP/MP commands with a zero amount are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDeltaPolicy {
    /// Log the action and push an undo entry like any other change.
    #[default]
    Record,
    /// Leave the state untouched.
    Ignore,
}

/// Tunables for a [`BattleEngine`](crate::engine::BattleEngine).
///
/// Deserializes from a partial document; missing fields take their defaults.
///
/// ```rust
/// use roundkeeper::engine::{EngineConfig, ZeroDeltaPolicy};
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "zero_delta": "ignore" }"#).unwrap();
/// assert_eq!(config.undo_limit, 50);
/// assert_eq!(config.zero_delta, ZeroDeltaPolicy::Ignore);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of undo snapshots kept
    pub undo_limit: usize,
    pub zero_delta: ZeroDeltaPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            undo_limit: UNDO_LIMIT,
            zero_delta: ZeroDeltaPolicy::Record,
        }
    }
}

impl EngineConfig {
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = limit;
        self
    }

    pub fn with_zero_delta(mut self, policy: ZeroDeltaPolicy) -> Self {
        self.zero_delta = policy;
        self
    }
}
