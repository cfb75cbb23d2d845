//! Pure per-command transitions.
//!
//! Each function takes the current snapshot by reference and returns a new
//! one. Unknown character or effect ids return an unchanged copy.

use crate::core::{
    apply_delta, Action, Character, CharacterSpec, Effect, EffectSpec, GameState, Phase, Pool,
    RoundHistory, RoundLog, UndoStack,
};
use crate::engine::config::{EngineConfig, ZeroDeltaPolicy};

pub fn add_character(state: &GameState, id: String, spec: &CharacterSpec) -> GameState {
    let mut next = state.clone();
    next.characters.push(Character::from_spec(id, spec));
    next
}

pub fn remove_character(state: &GameState, character_id: &str) -> GameState {
    if state.position(character_id).is_none() {
        tracing::trace!(character_id, "remove_character: no such character");
        return state.clone();
    }
    let mut next = state.clone();
    next.characters.retain(|c| c.id != character_id);
    next
}

pub fn start_battle(state: &GameState) -> GameState {
    GameState {
        phase: Phase::Battle,
        characters: state.characters.clone(),
        ..GameState::new()
    }
}

/// Apply a signed change to a character's HP or MP, clamped into range.
pub fn modify_pool(
    state: &GameState,
    character_id: &str,
    pool: Pool,
    amount: i32,
    config: &EngineConfig,
) -> GameState {
    let Some(index) = state.position(character_id) else {
        tracing::trace!(character_id, pool = pool.label(), "modify: no such character");
        return state.clone();
    };
    if amount == 0 && config.zero_delta == ZeroDeltaPolicy::Ignore {
        return state.clone();
    }

    let character = &state.characters[index];
    let before = character.pool(pool);
    let after = apply_delta(before, amount, character.pool_max(pool));
    let action = Action::new(
        character,
        format!("{:+} {} ({} → {})", amount, pool.label(), before, after),
    );

    let mut next = state.clone();
    next.characters[index].set_pool(pool, after);
    next.current_round_actions.push(action);
    next.undo_stack = state.undo_stack.push(state, config.undo_limit);
    next
}

pub fn add_effect(
    state: &GameState,
    character_id: &str,
    effect_id: String,
    spec: &EffectSpec,
    config: &EngineConfig,
) -> GameState {
    let Some(index) = state.position(character_id) else {
        tracing::trace!(character_id, "add_effect: no such character");
        return state.clone();
    };

    let effect = Effect::from_spec(effect_id, spec);
    let action = Action::new(
        &state.characters[index],
        format!(
            "Effect: {} for {} turns",
            effect.label(),
            effect.remaining_turns
        ),
    );

    let mut next = state.clone();
    next.characters[index].effects.push(effect);
    next.current_round_actions.push(action);
    next.undo_stack = state.undo_stack.push(state, config.undo_limit);
    next
}

/// Remove one effect. Not logged as an action.
pub fn remove_effect(
    state: &GameState,
    character_id: &str,
    effect_id: &str,
    config: &EngineConfig,
) -> GameState {
    let found = state
        .position(character_id)
        .filter(|&i| state.characters[i].effect(effect_id).is_some());
    let Some(index) = found else {
        tracing::trace!(character_id, effect_id, "remove_effect: no such effect");
        return state.clone();
    };

    let mut next = state.clone();
    next.characters[index].effects.retain(|e| e.id != effect_id);
    next.undo_stack = state.undo_stack.push(state, config.undo_limit);
    next
}

/// Close the current round.
///
/// Characters are processed in roster order. For each one, HP/MP effects
/// tick in list order, then every effect counts down and expired ones are
/// removed, so a character's ticks are always logged before its expiries.
pub fn end_turn(state: &GameState, config: &EngineConfig) -> GameState {
    let mut generated = Vec::new();
    let characters = state
        .characters
        .iter()
        .map(|c| tick_character(c, &mut generated))
        .collect();

    let mut actions = state.current_round_actions.clone();
    actions.extend(generated);

    GameState {
        phase: state.phase,
        characters,
        current_round: state.current_round.saturating_add(1),
        round_history: state.round_history.record(RoundHistory {
            round: state.current_round,
            actions,
        }),
        current_round_actions: Vec::new(),
        undo_stack: state.undo_stack.push(state, config.undo_limit),
    }
}

fn tick_character(character: &Character, log: &mut Vec<Action>) -> Character {
    let mut next = character.clone();

    for effect in &character.effects {
        let Some(pool) = Pool::ticked_by(effect.target) else {
            continue;
        };
        let before = next.pool(pool);
        let after = apply_delta(before, effect.value, next.pool_max(pool));
        // fully absorbed by the clamp: nothing to report
        if before == after {
            continue;
        }
        next.set_pool(pool, after);
        log.push(Action::new(
            character,
            format!(
                "{:+} {} tick ({} → {})",
                effect.value,
                pool.label(),
                before,
                after
            ),
        ));
    }

    next.effects = character
        .effects
        .iter()
        .filter_map(|effect| {
            let remaining = effect.decremented();
            if remaining.is_none() {
                log.push(Action::new(character, format!("{} expired", effect.label())));
            }
            remaining
        })
        .collect();
    next.is_downed = next.current_hp == 0;
    next
}

/// Step back to the most recent undo snapshot; the stack beneath it becomes
/// the new undo stack.
pub fn undo(state: &GameState) -> GameState {
    match state.undo_stack.pop() {
        Some((previous, rest)) => GameState {
            undo_stack: rest,
            ..previous
        },
        None => {
            tracing::trace!("undo: nothing to undo");
            state.clone()
        }
    }
}

pub fn restart(state: &GameState) -> GameState {
    GameState {
        phase: state.phase,
        characters: state.characters.iter().map(Character::restored).collect(),
        current_round: 1,
        round_history: RoundLog::new(),
        current_round_actions: Vec::new(),
        undo_stack: UndoStack::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacterKind, EffectTarget};

    fn spec(name: &str, max_hp: u32, max_mp: u32) -> CharacterSpec {
        CharacterSpec {
            name: name.to_string(),
            kind: CharacterKind::Hero,
            max_hp,
            max_mp,
            base_armor: 10,
            base_speed: 30,
        }
    }

    fn battle(characters: Vec<Character>) -> GameState {
        GameState {
            phase: Phase::Battle,
            characters,
            ..GameState::new()
        }
    }

    fn with_effect(mut c: Character, id: &str, target: EffectTarget, value: i32, turns: u32) -> Character {
        c.effects
            .push(Effect::from_spec(id, &EffectSpec::new(target, value, turns)));
        c
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn modify_hp_clamps_to_zero_and_downs() {
        let state = battle(vec![Character::from_spec("1", &spec("A", 20, 0))]);

        let next = modify_pool(&state, "1", Pool::Hp, -25, &config());

        let a = &next.characters[0];
        assert_eq!(a.current_hp, 0);
        assert!(a.is_downed);
        assert_eq!(next.current_round_actions[0].description, "-25 HP (20 → 0)");
        assert_eq!(next.undo_stack.len(), 1);
        assert_eq!(state.characters[0].current_hp, 20);
    }

    #[test]
    fn modify_mp_never_downs() {
        let state = battle(vec![Character::from_spec("1", &spec("A", 20, 10))]);

        let next = modify_pool(&state, "1", Pool::Mp, -10, &config());

        assert_eq!(next.characters[0].current_mp, 0);
        assert!(!next.characters[0].is_downed);
        assert_eq!(next.current_round_actions[0].description, "-10 MP (10 → 0)");
    }

    #[test]
    fn zero_amount_follows_policy() {
        let state = battle(vec![Character::from_spec("1", &spec("A", 20, 10))]);

        let recorded = modify_pool(&state, "1", Pool::Hp, 0, &config());
        assert_eq!(recorded.current_round_actions[0].description, "+0 HP (20 → 20)");
        assert_eq!(recorded.undo_stack.len(), 1);

        let ignore = config().with_zero_delta(ZeroDeltaPolicy::Ignore);
        let ignored = modify_pool(&state, "1", Pool::Hp, 0, &ignore);
        assert_eq!(ignored, state);
    }

    #[test]
    fn unknown_character_is_a_no_op() {
        let state = battle(vec![Character::from_spec("1", &spec("A", 20, 10))]);

        assert_eq!(modify_pool(&state, "9", Pool::Hp, -5, &config()), state);
        assert_eq!(
            add_effect(&state, "9", "5".into(), &EffectSpec::new(EffectTarget::Hp, -1, 2), &config()),
            state
        );
        assert_eq!(remove_character(&state, "9"), state);
    }

    #[test]
    fn remove_effect_only_touches_matching_effect() {
        let a = with_effect(Character::from_spec("1", &spec("A", 20, 10)), "2", EffectTarget::Armor, 2, 3);
        let a = with_effect(a, "3", EffectTarget::Speed, 1, 3);
        let state = battle(vec![a]);

        let next = remove_effect(&state, "1", "2", &config());
        assert_eq!(next.characters[0].effects.len(), 1);
        assert_eq!(next.characters[0].effects[0].id, "3");
        assert!(next.current_round_actions.is_empty());
        assert_eq!(next.undo_stack.len(), 1);

        assert_eq!(remove_effect(&state, "1", "404", &config()), state);
    }

    #[test]
    fn add_effect_logs_summary() {
        let state = battle(vec![Character::from_spec("1", &spec("A", 20, 10))]);

        let next = add_effect(
            &state,
            "1",
            "7".into(),
            &EffectSpec::new(EffectTarget::Armor, 5, 3),
            &config(),
        );

        assert_eq!(next.characters[0].effects[0].id, "7");
        assert_eq!(
            next.current_round_actions[0].description,
            "Effect: 🛡️+5 for 3 turns"
        );
    }

    #[test]
    fn end_turn_ticks_then_expires() {
        let mut a = Character::from_spec("1", &spec("A", 20, 10));
        a.set_pool(Pool::Hp, 10);
        let a = with_effect(a, "2", EffectTarget::Hp, -3, 1);
        let state = battle(vec![a]);

        let next = end_turn(&state, &config());

        let a = &next.characters[0];
        assert_eq!(a.current_hp, 7);
        assert!(a.effects.is_empty());
        let round = next.round_history.latest().unwrap();
        assert_eq!(round.round, 1);
        let descriptions: Vec<_> = round.actions.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(descriptions, vec!["-3 HP tick (10 → 7)", "❤️-3 expired"]);
        assert_eq!(next.current_round, 2);
    }

    #[test]
    fn end_turn_skips_fully_absorbed_ticks() {
        let mut a = Character::from_spec("1", &spec("A", 20, 10));
        a.set_pool(Pool::Hp, 0);
        let a = with_effect(a, "2", EffectTarget::Hp, -3, 2);
        let a = with_effect(a, "3", EffectTarget::Mp, 4, 2);
        let state = battle(vec![a]);

        let next = end_turn(&state, &config());

        assert!(next.round_history.latest().unwrap().actions.is_empty());
        assert!(next.characters[0].is_downed);
        assert_eq!(next.characters[0].effects[0].remaining_turns, 1);
    }

    #[test]
    fn end_turn_keeps_character_order_and_prior_actions() {
        let a = with_effect(Character::from_spec("1", &spec("A", 20, 10)), "3", EffectTarget::Speed, 2, 1);
        let mut b = Character::from_spec("2", &spec("B", 20, 10));
        b.set_pool(Pool::Mp, 5);
        let b = with_effect(b, "4", EffectTarget::Mp, 2, 2);
        let state = battle(vec![a, b]);
        let state = modify_pool(&state, "2", Pool::Hp, -1, &config());

        let next = end_turn(&state, &config());

        let actions = &next.round_history.latest().unwrap().actions;
        let lines: Vec<_> = actions
            .iter()
            .map(|a| format!("{}: {}", a.character_name, a.description))
            .collect();
        assert_eq!(
            lines,
            vec![
                "B: -1 HP (20 → 19)",
                "A: 🏃+2 expired",
                "B: +2 MP tick (5 → 7)",
            ]
        );
        assert!(next.current_round_actions.is_empty());
        assert_eq!(next.undo_stack.len(), 2);
    }

    #[test]
    fn end_turn_can_revive_from_healing_tick() {
        let mut a = Character::from_spec("1", &spec("A", 20, 10));
        a.set_pool(Pool::Hp, 0);
        let a = with_effect(a, "2", EffectTarget::Hp, 4, 3);

        let next = end_turn(&battle(vec![a]), &config());

        assert_eq!(next.characters[0].current_hp, 4);
        assert!(!next.characters[0].is_downed);
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let state = battle(vec![Character::from_spec("1", &spec("A", 20, 10))]);
        let hit = modify_pool(&state, "1", Pool::Hp, -5, &config());

        let back = undo(&hit);
        assert_eq!(back, state);
        assert_eq!(undo(&back), back);
    }

    #[test]
    fn restart_resets_everything_but_roster_and_phase() {
        let a = with_effect(Character::from_spec("1", &spec("A", 20, 10)), "2", EffectTarget::Hp, -3, 4);
        let state = battle(vec![a]);
        let state = modify_pool(&state, "1", Pool::Hp, -20, &config());
        let state = end_turn(&state, &config());

        let fresh = restart(&state);

        assert_eq!(fresh.phase, Phase::Battle);
        assert_eq!(fresh.current_round, 1);
        assert!(fresh.round_history.is_empty());
        assert!(fresh.undo_stack.is_empty());
        assert_eq!(fresh.characters[0].current_hp, 20);
        assert!(fresh.characters[0].effects.is_empty());
    }

    #[test]
    fn start_battle_clears_round_tracking() {
        let state = GameState {
            characters: vec![
                Character::from_spec("1", &spec("A", 20, 10)),
                Character::from_spec("2", &spec("B", 20, 10)),
            ],
            current_round: 4,
            ..GameState::new()
        };

        let next = start_battle(&state);

        assert_eq!(next.phase, Phase::Battle);
        assert_eq!(next.current_round, 1);
        assert_eq!(next.characters, state.characters);
    }
}
