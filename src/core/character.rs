//! Characters taking part in a battle.

use super::effect::{Effect, EffectTarget};
use super::stats;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Identifier assigned to a character at creation, stable for its lifetime.
pub type CharacterId = String;

/// Which side a character fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    Hero,
    Enemy,
}

/// A bounded resource pool on a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    Hp,
    Mp,
}

impl Pool {
    /// Name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Mp => "MP",
        }
    }

    /// The pool an effect ticks against, if any.
    pub fn ticked_by(target: EffectTarget) -> Option<Self> {
        match target {
            EffectTarget::Hp => Some(Self::Hp),
            EffectTarget::Mp => Some(Self::Mp),
            EffectTarget::Armor | EffectTarget::Speed => None,
        }
    }
}

/// Apply a signed delta to a pool value, clamping into `[0, max]`.
pub fn apply_delta(current: u32, delta: i32, max: u32) -> u32 {
    let next = (i64::from(current) + i64::from(delta)).clamp(0, i64::from(max));
    // in range by the clamp above
    next as u32
}

/// The creation-time description of a character, before an id is assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CharacterKind,
    pub max_hp: u32,
    pub max_mp: u32,
    pub base_armor: i32,
    pub base_speed: i32,
}

/// A hero or enemy on the roster.
///
/// `current_hp` and `current_mp` always lie within `[0, max]`, and
/// `is_downed` is true exactly when `current_hp == 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CharacterKind,
    pub max_hp: u32,
    pub current_hp: u32,
    pub max_mp: u32,
    pub current_mp: u32,
    pub base_armor: i32,
    pub base_speed: i32,
    pub is_downed: bool,
    pub effects: Vec<Effect>,
}

impl Character {
    /// Create a character at full HP and MP with no effects.
    pub fn from_spec(id: impl Into<CharacterId>, spec: &CharacterSpec) -> Self {
        Self {
            id: id.into(),
            name: spec.name.clone(),
            kind: spec.kind,
            max_hp: spec.max_hp,
            current_hp: spec.max_hp,
            max_mp: spec.max_mp,
            current_mp: spec.max_mp,
            base_armor: spec.base_armor,
            base_speed: spec.base_speed,
            is_downed: spec.max_hp == 0,
            effects: Vec::new(),
        }
    }

    pub fn is_hero(&self) -> bool {
        self.kind == CharacterKind::Hero
    }

    pub fn is_enemy(&self) -> bool {
        self.kind == CharacterKind::Enemy
    }

    pub fn effective_armor(&self) -> i32 {
        stats::effective_armor(self)
    }

    pub fn effective_speed(&self) -> i32 {
        stats::effective_speed(self)
    }

    pub fn effect(&self, effect_id: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.id == effect_id)
    }

    pub fn pool(&self, pool: Pool) -> u32 {
        match pool {
            Pool::Hp => self.current_hp,
            Pool::Mp => self.current_mp,
        }
    }

    pub fn pool_max(&self, pool: Pool) -> u32 {
        match pool {
            Pool::Hp => self.max_hp,
            Pool::Mp => self.max_mp,
        }
    }

    /// Set a pool, clamped to its maximum. Setting HP also refreshes
    /// `is_downed`.
    pub fn set_pool(&mut self, pool: Pool, value: u32) {
        let value = value.min(self.pool_max(pool));
        match pool {
            Pool::Hp => {
                self.current_hp = value;
                self.is_downed = value == 0;
            }
            Pool::Mp => self.current_mp = value,
        }
    }

    /// Deltas that move HP without being clamped.
    pub fn hp_adjust_range(&self) -> RangeInclusive<i64> {
        adjust_range(self.current_hp, self.max_hp)
    }

    /// Deltas that move MP without being clamped.
    pub fn mp_adjust_range(&self) -> RangeInclusive<i64> {
        adjust_range(self.current_mp, self.max_mp)
    }

    /// Back to full pools with every effect cleared.
    pub fn restored(&self) -> Self {
        Self {
            current_hp: self.max_hp,
            current_mp: self.max_mp,
            is_downed: self.max_hp == 0,
            effects: Vec::new(),
            ..self.clone()
        }
    }
}

fn adjust_range(current: u32, max: u32) -> RangeInclusive<i64> {
    -i64::from(current)..=i64::from(max.saturating_sub(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::EffectSpec;

    fn spec() -> CharacterSpec {
        CharacterSpec {
            name: "Aria".to_string(),
            kind: CharacterKind::Hero,
            max_hp: 20,
            max_mp: 10,
            base_armor: 10,
            base_speed: 30,
        }
    }

    #[test]
    fn from_spec_starts_at_full_pools() {
        let c = Character::from_spec("7", &spec());

        assert_eq!(c.id, "7");
        assert_eq!(c.current_hp, 20);
        assert_eq!(c.current_mp, 10);
        assert!(!c.is_downed);
        assert!(c.effects.is_empty());
        assert!(c.is_hero());
    }

    #[test]
    fn apply_delta_clamps_both_ends() {
        assert_eq!(apply_delta(20, -25, 20), 0);
        assert_eq!(apply_delta(18, 5, 20), 20);
        assert_eq!(apply_delta(10, -3, 20), 7);
        assert_eq!(apply_delta(0, i32::MIN, 20), 0);
        assert_eq!(apply_delta(u32::MAX, i32::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn set_pool_tracks_downed_flag() {
        let mut c = Character::from_spec("1", &spec());

        c.set_pool(Pool::Hp, 0);
        assert!(c.is_downed);

        c.set_pool(Pool::Hp, 50);
        assert_eq!(c.current_hp, 20);
        assert!(!c.is_downed);

        c.set_pool(Pool::Mp, 0);
        assert_eq!(c.current_mp, 0);
        assert!(!c.is_downed);
    }

    #[test]
    fn adjust_ranges_follow_current_values() {
        let mut c = Character::from_spec("1", &spec());
        c.set_pool(Pool::Hp, 15);

        assert_eq!(c.hp_adjust_range(), -15..=5);
        assert_eq!(c.mp_adjust_range(), -10..=0);
    }

    #[test]
    fn restored_clears_effects_and_refills() {
        let mut c = Character::from_spec("1", &spec());
        c.set_pool(Pool::Hp, 0);
        c.set_pool(Pool::Mp, 3);
        c.effects.push(Effect::from_spec(
            "2",
            &EffectSpec::new(EffectTarget::Hp, -1, 3),
        ));

        let fresh = c.restored();
        assert_eq!(fresh.current_hp, 20);
        assert_eq!(fresh.current_mp, 10);
        assert!(!fresh.is_downed);
        assert!(fresh.effects.is_empty());
        assert_eq!(fresh.id, c.id);
    }

    #[test]
    fn restored_keeps_zero_max_hp_character_downed() {
        let husk = Character::from_spec(
            "1",
            &CharacterSpec {
                max_hp: 0,
                ..spec()
            },
        );

        let fresh = husk.restored();
        assert_eq!(fresh.current_hp, 0);
        assert!(fresh.is_downed);
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let json = serde_json::to_value(Character::from_spec("1", &spec())).unwrap();
        assert_eq!(json["type"], "hero");
        assert_eq!(json["currentHp"], 20);
        assert_eq!(json["isDowned"], false);
    }
}
