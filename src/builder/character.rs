//! Builder for character specs.

use crate::builder::error::BuildError;
use crate::builder::check_range;
use crate::core::{CharacterKind, CharacterSpec};

pub const MAX_HP_RANGE: (i64, i64) = (1, 999);
pub const MAX_MP_RANGE: (i64, i64) = (0, 999);
pub const ARMOR_RANGE: (i64, i64) = (0, 99);
pub const SPEED_RANGE: (i64, i64) = (0, 99);

/// Builder for [`CharacterSpec`] with a fluent API.
///
/// Starts from the usual table defaults: 20 HP, 10 MP, armor 10, speed 30.
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: Option<String>,
    kind: Option<CharacterKind>,
    max_hp: u32,
    max_mp: u32,
    base_armor: i32,
    base_speed: i32,
}

impl Default for CharacterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            kind: None,
            max_hp: 20,
            max_mp: 10,
            base_armor: 10,
            base_speed: 30,
        }
    }

    /// Set the display name (required). Surrounding whitespace is trimmed.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: CharacterKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn hero(self) -> Self {
        self.kind(CharacterKind::Hero)
    }

    pub fn enemy(self) -> Self {
        self.kind(CharacterKind::Enemy)
    }

    pub fn max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = max_hp;
        self
    }

    pub fn max_mp(mut self, max_mp: u32) -> Self {
        self.max_mp = max_mp;
        self
    }

    pub fn armor(mut self, armor: i32) -> Self {
        self.base_armor = armor;
        self
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.base_speed = speed;
        self
    }

    /// Build the spec, checking every field.
    pub fn build(self) -> Result<CharacterSpec, BuildError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(BuildError::MissingName)?;
        let kind = self.kind.ok_or(BuildError::MissingKind)?;

        check_range("max_hp", self.max_hp.into(), MAX_HP_RANGE)?;
        check_range("max_mp", self.max_mp.into(), MAX_MP_RANGE)?;
        check_range("armor", self.base_armor.into(), ARMOR_RANGE)?;
        check_range("speed", self.base_speed.into(), SPEED_RANGE)?;

        Ok(CharacterSpec {
            name,
            kind,
            max_hp: self.max_hp,
            max_mp: self.max_mp,
            base_armor: self.base_armor,
            base_speed: self.base_speed,
        })
    }
}
