//! Builder for effect specs.

use crate::builder::check_range;
use crate::builder::error::BuildError;
use crate::core::{EffectSpec, EffectTarget};

pub const VALUE_RANGE: (i64, i64) = (-99, 99);
pub const DURATION_RANGE: (i64, i64) = (1, 99);

/// Builder for [`EffectSpec`] with a fluent API. Duration defaults to 3.
#[derive(Clone, Debug)]
pub struct EffectBuilder {
    target: Option<EffectTarget>,
    value: i32,
    turns: u32,
}

impl Default for EffectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectBuilder {
    pub fn new() -> Self {
        Self {
            target: None,
            value: 0,
            turns: 3,
        }
    }

    /// Set the stat the effect acts on (required).
    pub fn target(mut self, target: EffectTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the signed per-round delta or modifier (required, non-zero).
    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }

    pub fn build(self) -> Result<EffectSpec, BuildError> {
        let target = self.target.ok_or(BuildError::MissingTarget)?;
        if self.value == 0 {
            return Err(BuildError::ZeroValue);
        }
        check_range("value", self.value.into(), VALUE_RANGE)?;
        check_range("turns", self.turns.into(), DURATION_RANGE)?;

        Ok(EffectSpec::new(target, self.value, self.turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_duration() {
        let spec = EffectBuilder::new()
            .target(EffectTarget::Hp)
            .value(-3)
            .build()
            .unwrap();

        assert_eq!(spec, EffectSpec::new(EffectTarget::Hp, -3, 3));
    }

    #[test]
    fn zero_value_and_missing_target_are_rejected() {
        assert_eq!(
            EffectBuilder::new().value(2).build(),
            Err(BuildError::MissingTarget)
        );
        assert_eq!(
            EffectBuilder::new().target(EffectTarget::Armor).build(),
            Err(BuildError::ZeroValue)
        );
    }

    #[test]
    fn limits_are_enforced() {
        let result = EffectBuilder::new()
            .target(EffectTarget::Speed)
            .value(150)
            .build();
        assert!(matches!(result, Err(BuildError::OutOfRange { field: "value", .. })));

        let result = EffectBuilder::new()
            .target(EffectTarget::Speed)
            .value(2)
            .turns(0)
            .build();
        assert!(matches!(result, Err(BuildError::OutOfRange { field: "turns", .. })));
    }
}
