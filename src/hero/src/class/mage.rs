// src/hero/src/class/mage.rs

use narration::{LineKind, Narrator};

use crate::{Character, Class};

/// 法师：施法角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mage {
    name: String,
}

impl Mage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Mage {
    fn name(&self) -> &str {
        &self.name
    }

    fn use_ability(&self, narrator: &mut dyn Narrator) {
        tracing::trace!(hero = %self.name, "mage ability");
        narrator.narrate(
            LineKind::Ability,
            format!("{} {}", self.name, Class::Mage.flavor()),
        );
    }
}
