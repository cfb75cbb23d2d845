//! Battle data model and derived-stat calculation.
//!
//! This module contains the pure data side of the tracker:
//! - Characters, their timed effects and derived stats
//! - The action log and per-round history
//! - The snapshot (`GameState`) with its bounded undo stack
//! - Guard predicates used to gate commands
//!
//! Nothing here performs I/O or holds hidden state.

mod character;
mod effect;
mod guard;
mod history;
mod state;
pub mod stats;
mod undo;

pub use character::{apply_delta, Character, CharacterId, CharacterKind, CharacterSpec, Pool};
pub use effect::{Effect, EffectId, EffectSpec, EffectTarget};
pub use guard::Guard;
pub use history::{Action, RoundHistory, RoundLog};
pub use state::{GameState, Phase, MIN_COMBATANTS};
pub use undo::{UndoStack, UNDO_LIMIT};
