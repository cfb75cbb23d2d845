//! The battle snapshot.
//!
//! A `GameState` is an immutable value: the engine never changes one in place,
//! every command yields a fresh snapshot.

use super::character::Character;
use super::history::{Action, RoundHistory, RoundLog};
use super::undo::UndoStack;
use serde::{Deserialize, Serialize};

/// Fewest characters a battle is meant to start with.
pub const MIN_COMBATANTS: usize = 2;

/// Top-level phase of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Building the roster
    #[default]
    Setup,
    /// Rounds are being played
    Battle,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Battle => "battle",
        }
    }
}

/// The whole battle snapshot.
///
/// The undo stack is working memory: it is skipped by serialization and comes
/// back empty when a snapshot is deserialized.
///
/// # Example
///
/// ```rust
/// use roundkeeper::core::{GameState, Phase};
///
/// let state = GameState::new();
/// assert_eq!(state.phase, Phase::Setup);
/// assert_eq!(state.current_round, 1);
/// assert!(state.characters.is_empty());
/// assert!(!state.can_undo());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: Phase,
    /// Roster in creation order
    pub characters: Vec<Character>,
    /// Starts at 1, advanced only by the end of a round
    pub current_round: u32,
    /// Completed rounds, oldest first
    pub round_history: RoundLog,
    /// Actions logged so far in the round in progress
    pub current_round_actions: Vec<Action>,
    #[serde(skip)]
    pub undo_stack: UndoStack,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The initial state: setup phase, empty roster, round 1.
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            characters: Vec::new(),
            current_round: 1,
            round_history: RoundLog::new(),
            current_round_actions: Vec::new(),
            undo_stack: UndoStack::new(),
        }
    }

    /// Copy of this snapshot with an empty undo stack.
    pub fn without_undo(&self) -> Self {
        Self {
            phase: self.phase,
            characters: self.characters.clone(),
            current_round: self.current_round,
            round_history: self.round_history.clone(),
            current_round_actions: self.current_round_actions.clone(),
            undo_stack: UndoStack::new(),
        }
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    pub fn heroes(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_hero())
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_enemy())
    }

    pub fn can_start_battle(&self) -> bool {
        self.phase == Phase::Setup && self.characters.len() >= MIN_COMBATANTS
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// The most recently completed round, if any.
    pub fn latest_round(&self) -> Option<&RoundHistory> {
        self.round_history.latest()
    }
}
