// src/items/src/sword.rs
use hero::Character;
use narration::{LineKind, Narrator};

use crate::Item;

/// 剑
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sword;

impl Item for Sword {
    fn name(&self) -> String {
        "Sword".to_string()
    }

    fn use_by(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        narrator.narrate(
            LineKind::Use,
            format!("{} slashes with the {}.", character.name(), self.name()),
        );
    }
}
