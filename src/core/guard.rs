//! Guard predicates for controlling which commands may run.
//!
//! Guards are pure boolean functions over a snapshot. A command whose guard
//! fails is absorbed as a no-op rather than reported as an error.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a command can execute.
///
/// # Example
///
/// ```rust
/// use roundkeeper::core::{GameState, Guard, Phase};
///
/// let in_setup = Guard::new(|s: &GameState| s.phase == Phase::Setup);
///
/// assert!(in_setup.check(&GameState::new()));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the command against this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{GameState, Phase};

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &GameState| s.phase == Phase::Setup);

        assert!(guard.check(&GameState::new()));
        assert!(!guard.check(&GameState {
            phase: Phase::Battle,
            ..GameState::new()
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = GameState::new();
        let guard = Guard::new(|s: &GameState| s.can_start_battle());

        assert_eq!(guard.check(&state), guard.check(&state));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|n: &u32| *n > 3);
        let copy = guard.clone();

        assert!(copy.check(&4));
        assert!(!copy.check(&2));
    }
}
