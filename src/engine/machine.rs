//! The battle state engine.

use crate::core::{GameState, Guard, Phase, Pool};
use crate::engine::command::{Command, CommandKind};
use crate::engine::config::EngineConfig;
use crate::engine::ids::{IdGenerator, SequentialIds};
use crate::engine::transition;

/// Applies commands to snapshots.
///
/// The engine owns its id sequence and configuration but never a snapshot:
/// `apply` reads the input state and returns a new one. It is total, so
/// unknown ids, blocked guards and empty undo stacks all come back as an
/// unchanged copy of the input.
///
/// # Example
///
/// ```rust
/// use roundkeeper::core::{CharacterKind, CharacterSpec, GameState};
/// use roundkeeper::engine::{BattleEngine, Command};
///
/// let mut engine = BattleEngine::new();
/// let goblin = CharacterSpec {
///     name: "Goblin".to_string(),
///     kind: CharacterKind::Enemy,
///     max_hp: 7,
///     max_mp: 0,
///     base_armor: 15,
///     base_speed: 30,
/// };
///
/// let state = engine.apply(&GameState::new(), Command::AddCharacter(goblin));
/// let state = engine.apply(&state, Command::StartBattle);
/// let state = engine.apply(&state, Command::modify_hp("1", -4));
///
/// assert_eq!(state.characters[0].current_hp, 3);
/// assert!(state.can_undo());
/// ```
pub struct BattleEngine {
    config: EngineConfig,
    ids: Box<dyn IdGenerator>,
    guards: Vec<(CommandKind, Guard<GameState>)>,
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleEngine {
    /// Engine with default configuration and sequential ids.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ids: Box::new(SequentialIds::new()),
            guards: vec![(
                CommandKind::AddCharacter,
                Guard::new(|s: &GameState| s.phase == Phase::Setup),
            )],
        }
    }

    /// Replace the id generator.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Add a precondition for one kind of command. All guards registered for
    /// a kind must pass for the command to apply.
    pub fn guard(mut self, kind: CommandKind, guard: Guard<GameState>) -> Self {
        self.guards.push((kind, guard));
        self
    }

    /// Add a precondition using a closure.
    pub fn when<F>(self, kind: CommandKind, predicate: F) -> Self
    where
        F: Fn(&GameState) -> bool + Send + Sync + 'static,
    {
        self.guard(kind, Guard::new(predicate))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check whether every guard for `kind` admits `state` (pure).
    pub fn permits(&self, state: &GameState, kind: CommandKind) -> bool {
        self.guards
            .iter()
            .filter(|(k, _)| *k == kind)
            .all(|(_, g)| g.check(state))
    }

    /// Apply one command, returning the resulting snapshot.
    pub fn apply(&mut self, state: &GameState, command: Command) -> GameState {
        let kind = command.kind();
        if !self.permits(state, kind) {
            tracing::trace!(command = %kind, phase = state.phase.name(), "guard blocked command");
            return state.clone();
        }
        tracing::debug!(command = %kind, round = state.current_round, "applying command");

        let config = &self.config;
        match command {
            Command::AddCharacter(spec) => {
                let id = self.ids.next_id();
                transition::add_character(state, id, &spec)
            }
            Command::RemoveCharacter { character_id } => {
                transition::remove_character(state, &character_id)
            }
            Command::StartBattle => transition::start_battle(state),
            Command::ModifyHp {
                character_id,
                amount,
            } => transition::modify_pool(state, &character_id, Pool::Hp, amount, config),
            Command::ModifyMp {
                character_id,
                amount,
            } => transition::modify_pool(state, &character_id, Pool::Mp, amount, config),
            Command::AddEffect {
                character_id,
                effect,
            } => {
                if state.character(&character_id).is_none() {
                    tracing::trace!(%character_id, "add_effect: no such character");
                    return state.clone();
                }
                let effect_id = self.ids.next_id();
                transition::add_effect(state, &character_id, effect_id, &effect, config)
            }
            Command::RemoveEffect {
                character_id,
                effect_id,
            } => transition::remove_effect(state, &character_id, &effect_id, config),
            Command::EndTurn => transition::end_turn(state, config),
            Command::Undo => transition::undo(state),
            Command::Restart => transition::restart(state),
            Command::LoadState(loaded) => {
                observe_ids(self.ids.as_mut(), &loaded);
                *loaded
            }
        }
    }
}

fn observe_ids(ids: &mut dyn IdGenerator, state: &GameState) {
    for character in &state.characters {
        ids.observe(&character.id);
        for effect in &character.effects {
            ids.observe(&effect.id);
        }
    }
}
