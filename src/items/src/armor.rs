//src/items/src/armor.rs
use hero::Character;
use narration::{LineKind, Narrator};

use crate::{Equipable, Item};

/// 护甲：唯一同时可使用、可装备的物品
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Armor;

impl Item for Armor {
    fn name(&self) -> String {
        "Armor".to_string()
    }

    fn use_by(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        narrator.narrate(
            LineKind::Use,
            format!("{} braces behind the {}.", character.name(), self.name()),
        );
    }

    fn as_equipable(&self) -> Option<&dyn Equipable> {
        Some(self)
    }
}

impl Equipable for Armor {
    fn equip(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        tracing::debug!(hero = character.name(), "equipping armor");
        narrator.narrate(
            LineKind::Equip,
            format!("{} equips the {}.", character.name(), self.name()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::Mage;
    use narration::MessageLog;

    #[test]
    fn use_and_equip_are_separate_lines() {
        let mage = Mage::new("Gandalf");
        let mut log = MessageLog::new();

        Armor.use_by(&mage, &mut log);
        Armor.equip(&mage, &mut log);

        assert_eq!(
            log.texts(),
            vec!["Gandalf braces behind the Armor.", "Gandalf equips the Armor."]
        );
        assert_eq!(log.count_of(LineKind::Use), 1);
        assert_eq!(log.count_of(LineKind::Equip), 1);
    }

    #[test]
    fn armor_reports_equip_capability() {
        let mage = Mage::new("Radagast");
        let mut log = MessageLog::new();
        let armor = Armor;
        let equipable = armor.as_equipable().expect("armor is equipable");
        equipable.equip(&mage, &mut log);
        assert_eq!(log.texts(), vec!["Radagast equips the Armor."]);
    }
}
