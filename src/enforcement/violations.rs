//! Violation errors and handling strategies.

use thiserror::Error;

/// Structural problems found in a snapshot handed over for restoring
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotViolation {
    #[error("Character '{character_id}' has {current} HP, above its maximum of {max}")]
    HpAboveMax {
        character_id: String,
        current: u32,
        max: u32,
    },

    #[error("Character '{character_id}' has {current} MP, above its maximum of {max}")]
    MpAboveMax {
        character_id: String,
        current: u32,
        max: u32,
    },

    #[error("Character '{character_id}' has {current_hp} HP but is_downed = {is_downed}")]
    DownedMismatch {
        character_id: String,
        current_hp: u32,
        is_downed: bool,
    },

    #[error("Character id '{character_id}' appears more than once")]
    DuplicateCharacterId { character_id: String },

    #[error("Effect id '{effect_id}' appears more than once on character '{character_id}'")]
    DuplicateEffectId {
        character_id: String,
        effect_id: String,
    },

    #[error("Effect '{effect_id}' on character '{character_id}' has no turns remaining")]
    ExpiredEffect {
        character_id: String,
        effect_id: String,
    },

    #[error("Current round must be at least 1 (found {round})")]
    InvalidRound { round: u32 },

    #[error("Round history entry {index} (round {round}) is out of order")]
    HistoryOutOfOrder { index: usize, round: u32 },

    #[error("Round history contains round {round}, not before current round {current_round}")]
    HistoryAhead { round: u32, current_round: u32 },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling a snapshot with violations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViolationStrategy {
    /// Discard it and start from the initial state
    #[default]
    Reset,

    /// Fix what can be fixed; reset if violations remain
    Repair,
}
