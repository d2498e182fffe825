// src/manager.rs
use bag::ItemService;
use hero::Character;
use items::{Spellbook, Sword};
use narration::Narrator;

/// 角色管理器：驱动一个角色和一个物品服务
///
/// 角色和服务都是借用进来的，管理器不拥有它们。
pub struct CharacterManager<'a> {
    character: &'a dyn Character,
    service: &'a mut dyn ItemService,
}

impl<'a> CharacterManager<'a> {
    pub fn new(character: &'a dyn Character, service: &'a mut dyn ItemService) -> Self {
        Self { character, service }
    }

    /// 固定流程：施展技能 → 放入剑和法术书 → 使用全部物品
    ///
    /// 同时负责技能和物品准备两件事，保留这种写法作为单一职责的反例。
    pub fn perform_actions(&mut self, narrator: &mut dyn Narrator) {
        tracing::info!(hero = self.character.name(), "performing actions");
        self.character.use_ability(narrator);

        self.service.add_item(Box::new(Sword), narrator);
        self.service.add_item(Box::new(Spellbook), narrator);

        self.service.use_all_items(self.character, narrator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::{Mage, Warrior};
    use items::Loot;
    use narration::{LineKind, MessageLog};
    use pretty_assertions::assert_eq;

    /// 只记录调用的物品服务
    #[derive(Default)]
    struct SpyService {
        added: Vec<String>,
    }

    impl ItemService for SpyService {
        fn add_item(&mut self, item: Loot, _narrator: &mut dyn Narrator) {
            self.added.push(item.name());
        }

        fn use_all_items(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
            narrator.narrate(LineKind::Use, format!("spy used by {}", character.name()));
        }
    }

    #[test]
    fn manager_depends_only_on_the_service_abstraction() {
        let mage = Mage::new("Gandalf");
        let mut spy = SpyService::default();
        let mut log = MessageLog::new();

        CharacterManager::new(&mage, &mut spy).perform_actions(&mut log);

        assert_eq!(spy.added, vec!["Sword", "Spellbook"]);
        assert_eq!(
            log.texts(),
            vec!["Gandalf casts a fireball spell!", "spy used by Gandalf"]
        );
    }

    #[test]
    fn ability_comes_before_items() {
        let warrior = Warrior::new("Aragorn");
        let mut inventory = bag::Inventory::<Loot>::new();
        let mut service = bag::InventoryService::new(&mut inventory);
        let mut log = MessageLog::new();

        CharacterManager::new(&warrior, &mut service).perform_actions(&mut log);

        let kinds: Vec<LineKind> = log.lines().iter().map(|line| line.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Ability,
                LineKind::Inventory,
                LineKind::Inventory,
                LineKind::Use,
                LineKind::Use,
            ]
        );
        assert_eq!(inventory.len(), 2);
    }
}
