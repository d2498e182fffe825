// src/items/src/spellbook.rs
use hero::Character;
use narration::{LineKind, Narrator};

use crate::Item;

/// 法术书（只能使用，不能装备）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spellbook;

impl Item for Spellbook {
    fn name(&self) -> String {
        "Spellbook".to_string()
    }

    fn use_by(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        narrator.narrate(
            LineKind::Use,
            format!(
                "{} reads an incantation from the {}.",
                character.name(),
                self.name()
            ),
        );
    }
}
