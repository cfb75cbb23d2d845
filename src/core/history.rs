//! Action log and per-round history.
//!
//! Provides immutable tracking of what happened in each round, following
//! functional programming principles: recording a round returns a new log.

use super::character::{Character, CharacterId};
use serde::{Deserialize, Serialize};

/// One logged state change.
///
/// The character's name is captured when the action is logged, so later
/// renames or removals do not rewrite history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub character_id: CharacterId,
    pub character_name: String,
    pub description: String,
}

impl Action {
    /// Log an action against `character`.
    pub fn new(character: &Character, description: impl Into<String>) -> Self {
        Self {
            character_id: character.id.clone(),
            character_name: character.name.clone(),
            description: description.into(),
        }
    }
}

/// Every action that occurred during one round, including the round-end
/// ticks and expiries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHistory {
    /// The round number the actions belong to
    pub round: u32,
    /// Actions in the order they were logged
    pub actions: Vec<Action>,
}

/// Ordered, append-only log of completed rounds.
///
/// Rounds are stored oldest first. The log is immutable - `record` returns a
/// new log with the round appended.
///
/// # Example
///
/// ```rust
/// use roundkeeper::core::{RoundHistory, RoundLog};
///
/// let log = RoundLog::new();
/// let log = log.record(RoundHistory { round: 1, actions: vec![] });
/// let log = log.record(RoundHistory { round: 2, actions: vec![] });
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().map(|r| r.round), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundLog {
    rounds: Vec<RoundHistory>,
}

impl RoundLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Record a completed round, returning a new log.
    ///
    /// This is a pure function - the existing log is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roundkeeper::core::{RoundHistory, RoundLog};
    ///
    /// let log = RoundLog::new();
    /// let next = log.record(RoundHistory { round: 1, actions: vec![] });
    ///
    /// assert_eq!(next.len(), 1);
    /// assert!(log.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, round: RoundHistory) -> Self {
        let mut rounds = self.rounds.clone();
        rounds.push(round);
        Self { rounds }
    }

    /// All recorded rounds, oldest first.
    pub fn rounds(&self) -> &[RoundHistory] {
        &self.rounds
    }

    /// The most recently completed round.
    pub fn latest(&self) -> Option<&RoundHistory> {
        self.rounds.last()
    }

    /// Find a round by its number.
    pub fn round(&self, round: u32) -> Option<&RoundHistory> {
        self.rounds.iter().find(|r| r.round == round)
    }

    /// Every logged action concerning one character, across all rounds.
    pub fn actions_for<'a>(&'a self, character_id: &'a str) -> impl Iterator<Item = &'a Action> {
        self.rounds
            .iter()
            .flat_map(|r| r.actions.iter())
            .filter(move |a| a.character_id == character_id)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Whether round numbers strictly increase from oldest to newest.
    pub fn is_ordered(&self) -> bool {
        self.rounds.windows(2).all(|w| w[0].round < w[1].round)
    }
}

impl From<Vec<RoundHistory>> for RoundLog {
    fn from(rounds: Vec<RoundHistory>) -> Self {
        Self { rounds }
    }
}
