//! The closed set of commands the engine accepts.

use crate::core::{CharacterId, CharacterSpec, EffectId, EffectSpec, GameState};
use std::fmt;

/// A request to change the battle state.
///
/// Every command is total: applying it always yields a snapshot, possibly
/// identical to the input when the command does not apply.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Add a character to the roster (setup phase only).
    AddCharacter(CharacterSpec),
    RemoveCharacter {
        character_id: CharacterId,
    },
    StartBattle,
    ModifyHp {
        character_id: CharacterId,
        amount: i32,
    },
    ModifyMp {
        character_id: CharacterId,
        amount: i32,
    },
    AddEffect {
        character_id: CharacterId,
        effect: EffectSpec,
    },
    RemoveEffect {
        character_id: CharacterId,
        effect_id: EffectId,
    },
    /// Close the current round: tick, expire, and archive its actions.
    EndTurn,
    Undo,
    /// Refill every character and reset round tracking, keeping the roster.
    Restart,
    /// Replace the whole snapshot, as handed back by a persistence adapter.
    LoadState(Box<GameState>),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::AddCharacter(_) => CommandKind::AddCharacter,
            Self::RemoveCharacter { .. } => CommandKind::RemoveCharacter,
            Self::StartBattle => CommandKind::StartBattle,
            Self::ModifyHp { .. } => CommandKind::ModifyHp,
            Self::ModifyMp { .. } => CommandKind::ModifyMp,
            Self::AddEffect { .. } => CommandKind::AddEffect,
            Self::RemoveEffect { .. } => CommandKind::RemoveEffect,
            Self::EndTurn => CommandKind::EndTurn,
            Self::Undo => CommandKind::Undo,
            Self::Restart => CommandKind::Restart,
            Self::LoadState(_) => CommandKind::LoadState,
        }
    }

    pub fn modify_hp(character_id: impl Into<CharacterId>, amount: i32) -> Self {
        Self::ModifyHp {
            character_id: character_id.into(),
            amount,
        }
    }

    pub fn modify_mp(character_id: impl Into<CharacterId>, amount: i32) -> Self {
        Self::ModifyMp {
            character_id: character_id.into(),
            amount,
        }
    }

    pub fn add_effect(character_id: impl Into<CharacterId>, effect: EffectSpec) -> Self {
        Self::AddEffect {
            character_id: character_id.into(),
            effect,
        }
    }

    pub fn remove_effect(
        character_id: impl Into<CharacterId>,
        effect_id: impl Into<EffectId>,
    ) -> Self {
        Self::RemoveEffect {
            character_id: character_id.into(),
            effect_id: effect_id.into(),
        }
    }

    pub fn remove_character(character_id: impl Into<CharacterId>) -> Self {
        Self::RemoveCharacter {
            character_id: character_id.into(),
        }
    }

    pub fn load_state(state: GameState) -> Self {
        Self::LoadState(Box::new(state))
    }
}

/// Discriminant of a [`Command`], used to attach guards and in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    AddCharacter,
    RemoveCharacter,
    StartBattle,
    ModifyHp,
    ModifyMp,
    AddEffect,
    RemoveEffect,
    EndTurn,
    Undo,
    Restart,
    LoadState,
}

impl CommandKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddCharacter => "add_character",
            Self::RemoveCharacter => "remove_character",
            Self::StartBattle => "start_battle",
            Self::ModifyHp => "modify_hp",
            Self::ModifyMp => "modify_mp",
            Self::AddEffect => "add_effect",
            Self::RemoveEffect => "remove_effect",
            Self::EndTurn => "end_turn",
            Self::Undo => "undo",
            Self::Restart => "restart",
            Self::LoadState => "load_state",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
