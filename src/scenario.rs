// src/scenario.rs
//! 固定剧情
//!
//! 所有数值都是写死的字面量，不读取任何输入。

use std::io::Write;

use bag::{Inventory, InventoryService, ItemService};
use hero::{Character, Mage, Warrior};
use items::{Armor, Enhanced, Item, Loot, Sword};
use narration::{ConsoleNarrator, Narrator};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::CharacterManager;

/// 剧情列表（按声明顺序运行）
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Scenario {
    Warrior,
    Mage,
}

impl Scenario {
    /// 主角名字
    pub fn hero_name(self) -> &'static str {
        match self {
            Scenario::Warrior => "Aragorn",
            Scenario::Mage => "Gandalf",
        }
    }

    /// 运行剧情，返回结束时的背包
    pub fn run(self, narrator: &mut dyn Narrator) -> Inventory<Loot> {
        let _span = tracing::info_span!("scenario", name = %self).entered();
        let inventory = match self {
            Scenario::Warrior => run_warrior(narrator),
            Scenario::Mage => run_mage(narrator),
        };
        tracing::info!(items = inventory.len(), "scenario finished");
        inventory
    }
}

/// 依次运行全部剧情
pub fn run_all(narrator: &mut dyn Narrator) {
    for scenario in Scenario::iter() {
        scenario.run(narrator);
    }
}

/// 把全部剧情写到 `out`，写入失败时返回用户可读的错误
pub fn narrate_all<W: Write>(out: W) -> anyhow::Result<W> {
    let mut console = ConsoleNarrator::new(out);
    run_all(&mut console);

    let written = console.written();
    let out = console
        .finish()
        .map_err(|err| anyhow::anyhow!(error::handle_error(&err)))?;
    tracing::debug!(lines = written, "narration complete");
    Ok(out)
}

/// 战士剧情：空背包，交给管理器完成全部动作
pub fn run_warrior(narrator: &mut dyn Narrator) -> Inventory<Loot> {
    let warrior = Warrior::new(Scenario::Warrior.hero_name());
    let mut inventory: Inventory<Loot> = Inventory::new();
    let mut service = InventoryService::new(&mut inventory);

    CharacterManager::new(&warrior, &mut service).perform_actions(narrator);
    inventory
}

/// 法师剧情：先放入强化剑和护甲，再交给管理器，最后尝试装备
pub fn run_mage(narrator: &mut dyn Narrator) -> Inventory<Loot> {
    let mage = Mage::new(Scenario::Mage.hero_name());
    let mut inventory: Inventory<Loot> = Inventory::new();
    {
        let mut service = InventoryService::new(&mut inventory);
        service.add_item(Box::new(Enhanced::new(Sword)), narrator);
        service.add_item(Box::new(Armor), narrator);

        CharacterManager::new(&mage, &mut service).perform_actions(narrator);
    }

    equip_first(&inventory, &mage, narrator);
    inventory
}

/// 装备背包中第一件可装备的物品；没有则什么也不做
pub fn equip_first<T: Item>(
    inventory: &Inventory<T>,
    character: &dyn Character,
    narrator: &mut dyn Narrator,
) -> bool {
    match inventory.find_equipable() {
        Some(gear) => {
            gear.equip(character, narrator);
            true
        }
        None => {
            tracing::debug!(hero = character.name(), "nothing to equip");
            false
        }
    }
}
