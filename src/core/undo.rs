//! Bounded stack of prior snapshots backing multi-step undo.

use super::state::GameState;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of snapshots kept for undo.
pub const UNDO_LIMIT: usize = 50;

/// Prior snapshots, most recent last.
///
/// Entries are immutable and shared behind `Arc`, so cloning a stack never
/// copies the snapshots and no entry can be altered through another state.
/// Every entry has its own undo stack emptied, so stacks never nest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UndoStack {
    entries: VecDeque<Arc<GameState>>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new stack with `snapshot` pushed on top, evicting the oldest
    /// entries beyond `limit`.
    pub fn push(&self, snapshot: &GameState, limit: usize) -> Self {
        let mut entries = self.entries.clone();
        entries.push_back(Arc::new(snapshot.without_undo()));
        while entries.len() > limit {
            entries.pop_front();
        }
        Self { entries }
    }

    /// Split off the most recent snapshot, returning it together with the
    /// stack that remains beneath it.
    pub fn pop(&self) -> Option<(GameState, UndoStack)> {
        let mut entries = self.entries.clone();
        let top = entries.pop_back()?;
        Some((GameState::clone(&top), Self { entries }))
    }

    /// The snapshot `pop` would return.
    pub fn peek(&self) -> Option<&GameState> {
        self.entries.back().map(|s| s.as_ref())
    }

    /// Snapshots from oldest to most recent.
    pub fn iter(&self) -> impl Iterator<Item = &GameState> {
        self.entries.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
