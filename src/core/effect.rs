//! Timed status effects attached to a single character.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an effect, unique within one character's effect list.
pub type EffectId = String;

/// The stat an effect acts on.
///
/// HP and MP effects tick once per round end; armor and speed effects act as
/// continuous modifiers while they remain active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectTarget {
    Hp,
    Mp,
    Armor,
    Speed,
}

impl EffectTarget {
    /// Symbol used when the effect appears in the action log.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Hp => "❤️",
            Self::Mp => "🔵",
            Self::Armor => "🛡️",
            Self::Speed => "🏃",
        }
    }

    /// Whether the effect is applied as a delta at every round end.
    pub fn ticks(&self) -> bool {
        matches!(self, Self::Hp | Self::Mp)
    }

    /// Whether the effect modifies a derived stat while active.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Armor | Self::Speed)
    }
}

impl fmt::Display for EffectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hp => "hp",
            Self::Mp => "mp",
            Self::Armor => "armor",
            Self::Speed => "speed",
        };
        f.write_str(name)
    }
}

/// An effect as requested by the caller, before the engine assigns its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSpec {
    pub target: EffectTarget,
    pub value: i32,
    pub remaining_turns: u32,
}

impl EffectSpec {
    pub fn new(target: EffectTarget, value: i32, remaining_turns: u32) -> Self {
        Self {
            target,
            value,
            remaining_turns,
        }
    }
}

/// A timed modifier attached to one character.
///
/// `remaining_turns` is at least 1 while the effect sits in a character's
/// list; the round end that would bring it to 0 removes it instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub id: EffectId,
    pub target: EffectTarget,
    pub value: i32,
    pub remaining_turns: u32,
}

impl Effect {
    /// Materialize a spec under the given id. Durations below one turn are
    /// raised to one.
    pub fn from_spec(id: impl Into<EffectId>, spec: &EffectSpec) -> Self {
        Self {
            id: id.into(),
            target: spec.target,
            value: spec.value,
            remaining_turns: spec.remaining_turns.max(1),
        }
    }

    /// Short label such as `🛡️+5`, used in log lines.
    pub fn label(&self) -> String {
        format!("{}{:+}", self.target.symbol(), self.value)
    }

    /// Returns the effect after one round end, or `None` if it has expired.
    pub fn decremented(&self) -> Option<Self> {
        match self.remaining_turns.saturating_sub(1) {
            0 => None,
            remaining_turns => Some(Self {
                remaining_turns,
                ..self.clone()
            }),
        }
    }
}
