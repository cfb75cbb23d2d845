//! Builder API for validated character and effect specs.
//!
//! The engine accepts any `CharacterSpec` or `EffectSpec` and clamps what it must; these builders
//! apply the limits a setup form enforces before a command is ever issued.

pub mod character;
pub mod effect;
pub mod error;

pub use character::CharacterBuilder;
pub use effect::EffectBuilder;
pub use error::BuildError;

use crate::core::EffectTarget;

/// Start building a hero.
///
/// # Example
///
/// ```
/// use roundkeeper::builder::hero;
///
/// let spec = hero("Aria").max_hp(24).armor(14).build().unwrap();
/// assert_eq!(spec.max_hp, 24);
/// ```
pub fn hero(name: impl Into<String>) -> CharacterBuilder {
    CharacterBuilder::new().name(name).hero()
}

/// Start building an enemy.
pub fn enemy(name: impl Into<String>) -> CharacterBuilder {
    CharacterBuilder::new().name(name).enemy()
}

/// Start building an effect on `target`.
///
/// # Example
///
/// ```
/// use roundkeeper::builder::effect_on;
/// use roundkeeper::core::EffectTarget;
///
/// let poison = effect_on(EffectTarget::Hp).value(-2).turns(4).build().unwrap();
/// assert_eq!(poison.remaining_turns, 4);
/// ```
pub fn effect_on(target: EffectTarget) -> EffectBuilder {
    EffectBuilder::new().target(target)
}

fn check_range(field: &'static str, value: i64, (min, max): (i64, i64)) -> Result<(), BuildError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BuildError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
