//! Snapshot rules using Validation.

use crate::core::{Character, GameState, RoundLog};
use crate::enforcement::violations::{SnapshotViolation, ViolationStrategy};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a snapshot: success, or every violation found
pub type SnapshotValidation = Validation<(), NonEmptyVec<SnapshotViolation>>;

/// Type alias for validation check functions
pub type SnapshotCheck = Box<dyn Fn(&GameState) -> SnapshotValidation + Send + Sync>;

/// Rules a restored snapshot must satisfy.
/// Uses Validation to accumulate ALL violations.
pub struct SnapshotRules {
    required_checks: Vec<SnapshotCheck>,
    on_violation: ViolationStrategy,
}

impl Default for SnapshotRules {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRules {
    /// Built-in structural checks only, resetting on any violation.
    pub fn new() -> Self {
        Self {
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Reset,
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&GameState) -> SnapshotValidation + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: impl Into<String>) -> Self
    where
        F: Fn(&GameState) -> bool + Send + Sync + 'static,
    {
        let message = error_msg.into();
        let check = move |state: &GameState| {
            verify(predicate(state), || SnapshotViolation::CustomCheckFailed {
                message: message.clone(),
            })
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    /// Check every rule, accumulating ALL violations.
    pub fn enforce(&self, state: &GameState) -> SnapshotValidation {
        let mut checks: Vec<SnapshotValidation> = Vec::new();

        checks.push(verify(state.current_round >= 1, || {
            SnapshotViolation::InvalidRound {
                round: state.current_round,
            }
        }));

        let mut seen = HashSet::new();
        for character in &state.characters {
            checks.push(verify(seen.insert(character.id.as_str()), || {
                SnapshotViolation::DuplicateCharacterId {
                    character_id: character.id.clone(),
                }
            }));
            check_character(character, &mut checks);
        }

        check_history(&state.round_history, state.current_round, &mut checks);

        for check_fn in &self.required_checks {
            checks.push(check_fn(state));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// All violations found in `state`, in check order.
    pub fn violations(&self, state: &GameState) -> Vec<SnapshotViolation> {
        match self.enforce(state) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Accept `state` if it satisfies every rule, otherwise apply the
    /// violation strategy.
    pub fn resolve(&self, state: GameState) -> GameState {
        let violations = self.violations(&state);
        if violations.is_empty() {
            return state;
        }

        if self.on_violation == ViolationStrategy::Repair {
            let repaired = repair(&state);
            if self.enforce(&repaired).is_success() {
                tracing::warn!(count = violations.len(), "repaired restored snapshot");
                return repaired;
            }
        }

        for violation in &violations {
            tracing::warn!(%violation, "rejecting restored snapshot");
        }
        GameState::new()
    }
}

fn verify(ok: bool, violation: impl FnOnce() -> SnapshotViolation) -> SnapshotValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn check_character(character: &Character, checks: &mut Vec<SnapshotValidation>) {
    let id = || character.id.clone();

    checks.push(verify(character.current_hp <= character.max_hp, || {
        SnapshotViolation::HpAboveMax {
            character_id: id(),
            current: character.current_hp,
            max: character.max_hp,
        }
    }));
    checks.push(verify(character.current_mp <= character.max_mp, || {
        SnapshotViolation::MpAboveMax {
            character_id: id(),
            current: character.current_mp,
            max: character.max_mp,
        }
    }));
    checks.push(verify(
        character.is_downed == (character.current_hp == 0),
        || SnapshotViolation::DownedMismatch {
            character_id: id(),
            current_hp: character.current_hp,
            is_downed: character.is_downed,
        },
    ));

    let mut seen = HashSet::new();
    for effect in &character.effects {
        checks.push(verify(seen.insert(effect.id.as_str()), || {
            SnapshotViolation::DuplicateEffectId {
                character_id: id(),
                effect_id: effect.id.clone(),
            }
        }));
        checks.push(verify(effect.remaining_turns >= 1, || {
            SnapshotViolation::ExpiredEffect {
                character_id: id(),
                effect_id: effect.id.clone(),
            }
        }));
    }
}

fn check_history(history: &RoundLog, current_round: u32, checks: &mut Vec<SnapshotValidation>) {
    let mut previous: Option<u32> = None;
    for (index, entry) in history.rounds().iter().enumerate() {
        checks.push(verify(previous.map_or(true, |p| entry.round > p), || {
            SnapshotViolation::HistoryOutOfOrder {
                index,
                round: entry.round,
            }
        }));
        checks.push(verify(entry.round < current_round, || {
            SnapshotViolation::HistoryAhead {
                round: entry.round,
                current_round,
            }
        }));
        previous = Some(entry.round);
    }
}

/// Fix what can be fixed without guessing: clamp pools, recompute downed
/// flags, drop duplicate characters and effects, drop expired effects, and
/// keep only the history entries that are in order.
pub fn repair(state: &GameState) -> GameState {
    let current_round = state.current_round.max(1);

    let mut seen = HashSet::new();
    let characters = state
        .characters
        .iter()
        .filter(|c| seen.insert(c.id.clone()))
        .map(repair_character)
        .collect();

    let mut last: Option<u32> = None;
    let rounds = state
        .round_history
        .rounds()
        .iter()
        .filter(|entry| {
            let keep = entry.round < current_round && last.map_or(true, |p| entry.round > p);
            if keep {
                last = Some(entry.round);
            }
            keep
        })
        .cloned()
        .collect::<Vec<_>>();

    GameState {
        phase: state.phase,
        characters,
        current_round,
        round_history: RoundLog::from(rounds),
        current_round_actions: state.current_round_actions.clone(),
        undo_stack: Default::default(),
    }
}

fn repair_character(character: &Character) -> Character {
    let current_hp = character.current_hp.min(character.max_hp);
    let mut seen = HashSet::new();
    Character {
        current_hp,
        current_mp: character.current_mp.min(character.max_mp),
        is_downed: current_hp == 0,
        effects: character
            .effects
            .iter()
            .filter(|e| e.remaining_turns >= 1 && seen.insert(e.id.clone()))
            .cloned()
            .collect(),
        ..character.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        CharacterKind, CharacterSpec, Effect, EffectSpec, EffectTarget, Phase, RoundHistory,
    };

    fn character(id: &str) -> Character {
        Character::from_spec(
            id,
            &CharacterSpec {
                name: format!("char-{id}"),
                kind: CharacterKind::Hero,
                max_hp: 20,
                max_mp: 10,
                base_armor: 10,
                base_speed: 30,
            },
        )
    }

    fn valid() -> GameState {
        GameState {
            phase: Phase::Battle,
            characters: vec![character("1"), character("2")],
            current_round: 3,
            round_history: RoundLog::from(vec![
                RoundHistory { round: 1, actions: vec![] },
                RoundHistory { round: 2, actions: vec![] },
            ]),
            ..GameState::new()
        }
    }

    fn broken() -> GameState {
        let mut state = valid();
        state.characters[0].current_hp = 50;
        state.characters[1].current_hp = 0;
        state.characters[1].effects.push(Effect {
            remaining_turns: 0,
            ..Effect::from_spec("9", &EffectSpec::new(EffectTarget::Hp, -1, 1))
        });
        state.characters.push(character("1"));
        state
    }

    #[test]
    fn valid_snapshot_passes() {
        let rules = SnapshotRules::new();
        assert!(rules.enforce(&valid()).is_success());
        assert!(rules.enforce(&GameState::new()).is_success());
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let violations = SnapshotRules::new().violations(&broken());

        assert!(violations
            .iter()
            .any(|v| matches!(v, SnapshotViolation::HpAboveMax { current: 50, .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, SnapshotViolation::DownedMismatch { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, SnapshotViolation::ExpiredEffect { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, SnapshotViolation::DuplicateCharacterId { .. })));
        assert_eq!(violations.len(), 4);
    }

    #[test]
    fn history_violations_are_detected() {
        let mut state = valid();
        state.round_history = RoundLog::from(vec![
            RoundHistory { round: 2, actions: vec![] },
            RoundHistory { round: 1, actions: vec![] },
            RoundHistory { round: 5, actions: vec![] },
        ]);
        state.current_round = 0;

        let violations = SnapshotRules::new().violations(&state);

        assert!(violations.contains(&SnapshotViolation::InvalidRound { round: 0 }));
        assert!(violations.contains(&SnapshotViolation::HistoryOutOfOrder { index: 1, round: 1 }));
        assert!(violations.contains(&SnapshotViolation::HistoryAhead {
            round: 5,
            current_round: 0
        }));
    }

    #[test]
    fn custom_predicate_is_checked() {
        let rules = SnapshotRules::new().require_pred(|s| s.characters.len() <= 1, "roster too big");

        let result = rules.enforce(&valid());
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, SnapshotViolation::CustomCheckFailed { .. })));
        }
    }

    #[test]
    fn reset_strategy_substitutes_initial_state() {
        let rules = SnapshotRules::new();
        assert_eq!(rules.resolve(broken()), GameState::new());
        assert_eq!(rules.resolve(valid()), valid());
    }

    #[test]
    fn repair_strategy_fixes_what_it_can() {
        let rules = SnapshotRules::new().on_violation(ViolationStrategy::Repair);

        let state = rules.resolve(broken());

        assert_eq!(state.characters.len(), 2);
        assert_eq!(state.characters[0].current_hp, 20);
        assert!(state.characters[1].is_downed);
        assert!(state.characters[1].effects.is_empty());
        assert_eq!(state.current_round, 3);
        assert!(rules.enforce(&state).is_success());
    }

    #[test]
    fn repair_drops_out_of_order_history() {
        let mut state = valid();
        state.round_history = RoundLog::from(vec![
            RoundHistory { round: 1, actions: vec![] },
            RoundHistory { round: 1, actions: vec![] },
            RoundHistory { round: 2, actions: vec![] },
            RoundHistory { round: 7, actions: vec![] },
        ]);

        let fixed = repair(&state);
        let rounds: Vec<u32> = fixed.round_history.rounds().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2]);
    }

    #[test]
    fn repair_cannot_satisfy_failing_custom_check() {
        let rules = SnapshotRules::new()
            .on_violation(ViolationStrategy::Repair)
            .require_pred(|s| s.phase == Phase::Setup, "must be in setup");

        assert_eq!(rules.resolve(valid()), GameState::new());
    }

    #[test]
    fn violation_strategy_is_stored() {
        let rules = SnapshotRules::new().on_violation(ViolationStrategy::Repair);
        assert_eq!(rules.violation_strategy(), ViolationStrategy::Repair);
        assert_eq!(SnapshotRules::new().violation_strategy(), ViolationStrategy::Reset);
    }
}
