//! Derived stats computed from base values and active modifier effects.
//!
//! Everything here is pure and recomputed on every call; nothing is cached on
//! the character, so derived values cannot drift from the effect list.

use super::character::Character;
use super::effect::{Effect, EffectTarget};

/// Sum of the values of every effect aimed at `target`.
pub fn modifier_total(effects: &[Effect], target: EffectTarget) -> i32 {
    effects
        .iter()
        .filter(|e| e.target == target)
        .fold(0i32, |sum, e| sum.saturating_add(e.value))
}

/// Base armor plus every active armor effect.
///
/// # Example
///
/// ```rust
/// use roundkeeper::core::{stats, Character, CharacterKind, CharacterSpec, Effect, EffectSpec, EffectTarget};
///
/// let spec = CharacterSpec {
///     name: "Brom".to_string(),
///     kind: CharacterKind::Hero,
///     max_hp: 30,
///     max_mp: 0,
///     base_armor: 10,
///     base_speed: 25,
/// };
/// let mut brom = Character::from_spec("1", &spec);
/// brom.effects.push(Effect::from_spec("2", &EffectSpec::new(EffectTarget::Armor, 5, 3)));
///
/// assert_eq!(stats::effective_armor(&brom), 15);
/// assert_eq!(stats::effective_speed(&brom), 25);
/// ```
pub fn effective_armor(character: &Character) -> i32 {
    character
        .base_armor
        .saturating_add(modifier_total(&character.effects, EffectTarget::Armor))
}

/// Base speed plus every active speed effect.
pub fn effective_speed(character: &Character) -> i32 {
    character
        .base_speed
        .saturating_add(modifier_total(&character.effects, EffectTarget::Speed))
}
