// src/bag/src/service.rs
use hero::Character;
use items::{Item, Loot};
use narration::Narrator;

use crate::Inventory;

/// 物品服务抽象：上层只依赖它，而不是具体容器
pub trait ItemService {
    fn add_item(&mut self, item: Loot, narrator: &mut dyn Narrator);

    fn use_all_items(&self, character: &dyn Character, narrator: &mut dyn Narrator);
}

/// 对 [`Inventory`] 的纯转发包装
#[derive(Debug)]
pub struct InventoryService<'a, T: Item> {
    inventory: &'a mut Inventory<T>,
}

impl<'a, T: Item> InventoryService<'a, T> {
    pub fn new(inventory: &'a mut Inventory<T>) -> Self {
        Self { inventory }
    }

    /// 只读访问被包装的库存
    pub fn inventory(&self) -> &Inventory<T> {
        self.inventory
    }
}

impl ItemService for InventoryService<'_, Loot> {
    fn add_item(&mut self, item: Loot, narrator: &mut dyn Narrator) {
        self.inventory.add_item(item, narrator);
    }

    fn use_all_items(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        self.inventory.use_all_items(character, narrator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::Warrior;
    use items::{Armor, Sword};
    use narration::MessageLog;
    use pretty_assertions::assert_eq;

    #[test]
    fn service_forwards_to_inventory() {
        let hero = Warrior::new("Aragorn");
        let mut inventory: Inventory<Loot> = Inventory::new();
        let mut direct = MessageLog::new();
        let mut via_service = MessageLog::new();

        {
            let mut service = InventoryService::new(&mut inventory);
            service.add_item(Box::new(Sword), &mut via_service);
            service.add_item(Box::new(Armor), &mut via_service);
            service.use_all_items(&hero, &mut via_service);
            assert_eq!(service.inventory().len(), 2);
        }

        let mut reference: Inventory<Loot> = Inventory::new();
        reference.add_item(Box::new(Sword), &mut direct);
        reference.add_item(Box::new(Armor), &mut direct);
        reference.use_all_items(&hero, &mut direct);

        assert_eq!(via_service, direct);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn service_is_usable_as_trait_object() {
        let mut inventory: Inventory<Loot> = Inventory::new();
        let mut log = MessageLog::new();
        let mut service = InventoryService::new(&mut inventory);
        let port: &mut dyn ItemService = &mut service;
        port.add_item(Box::new(Sword), &mut log);
        assert_eq!(log.texts(), vec!["Added Sword to the inventory."]);
    }
}
