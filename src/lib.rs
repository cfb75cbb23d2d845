//! Roundkeeper: a pure functional battle tracker for tabletop sessions
//!
//! Roundkeeper follows a "pure core, imperative shell" layout. Every change to
//! a battle is a pure function from one immutable snapshot to the next, and
//! the few side effects (id allocation, persistence, logging) live at the edges.
//!
//! # Core Concepts
//!
//! - **Snapshot**: a [`core::GameState`] holding characters, round and log
//! - **Commands**: the closed set of changes in [`engine::Command`]
//! - **Effects**: timed HP/MP ticks and armor/speed modifiers
//! - **Undo**: a bounded stack of prior snapshots restored wholesale
//! - **Checkpoints**: versioned snapshots saved through a [`checkpoint::SnapshotStore`]
//!
//! # Example
//!
//! ```rust
//! use roundkeeper::builder::{effect_on, enemy, hero};
//! use roundkeeper::core::{EffectTarget, GameState};
//! use roundkeeper::engine::{BattleEngine, Command};
//!
//! let mut engine = BattleEngine::new();
//! let state = GameState::new();
//! let state = engine.apply(&state, Command::AddCharacter(hero("Aria").build().unwrap()));
//! let state = engine.apply(&state, Command::AddCharacter(enemy("Goblin").max_hp(7).build().unwrap()));
//! let state = engine.apply(&state, Command::StartBattle);
//!
//! let poison = effect_on(EffectTarget::Hp).value(-2).turns(2).build().unwrap();
//! let state = engine.apply(&state, Command::add_effect("2", poison));
//! let state = engine.apply(&state, Command::EndTurn);
//!
//! assert_eq!(state.current_round, 2);
//! assert_eq!(state.character("2").unwrap().current_hp, 5);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod enforcement;

// Re-export commonly used types
pub use core::{Character, Effect, EffectTarget, GameState, Phase};
pub use engine::{BattleEngine, BattleSession, Command};
