//! A single-writer session owning the current snapshot.

use crate::checkpoint::{self, CheckpointError, SnapshotStore};
use crate::core::GameState;
use crate::engine::command::Command;
use crate::engine::machine::BattleEngine;
use crate::enforcement::SnapshotRules;

/// Owns one engine and the current snapshot.
///
/// `dispatch` takes `&mut self`, so commands are applied strictly one at a
/// time against the latest snapshot. Sharing a session across threads
/// requires wrapping it in a lock, which keeps that serialization intact.
pub struct BattleSession {
    engine: BattleEngine,
    state: GameState,
}

impl BattleSession {
    /// Start from the initial state.
    pub fn new(engine: BattleEngine) -> Self {
        Self {
            engine,
            state: GameState::new(),
        }
    }

    /// Start from whatever `store` holds under `key`, or the initial state.
    pub fn restore<S>(engine: BattleEngine, store: &S, key: &str, rules: &SnapshotRules) -> Self
    where
        S: SnapshotStore + ?Sized,
    {
        let restored = checkpoint::restore(store, key, rules);
        let mut session = Self::new(engine);
        session.dispatch(Command::load_state(restored));
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    /// Apply `command` to the current snapshot and make the result current.
    pub fn dispatch(&mut self, command: Command) -> &GameState {
        self.state = self.engine.apply(&self.state, command);
        &self.state
    }

    /// Write the current snapshot under `key`.
    pub fn persist<S>(&self, store: &S, key: &str) -> Result<(), CheckpointError>
    where
        S: SnapshotStore + ?Sized,
    {
        checkpoint::persist(store, key, &self.state)
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new(BattleEngine::new())
    }
}
