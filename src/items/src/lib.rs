//src/items/src/lib.rs
//! 物品系统
//!
//! “使用”和“装备”是两种独立的能力：所有物品都实现 [`Item`]，
//! 只有可以穿戴的物品（护甲）额外实现 [`Equipable`]。

use std::fmt;

use hero::Character;
use narration::Narrator;

pub use crate::armor::Armor;
pub use crate::enhanced::Enhanced;
pub use crate::spellbook::Spellbook;
pub use crate::sword::Sword;

pub mod armor;
pub mod enhanced;
pub mod spellbook;
pub mod sword;

/// 混装背包里的物品
pub type Loot = Box<dyn Item>;

/// 物品特性约束
pub trait Item: fmt::Debug {
    /// 显示名称
    fn name(&self) -> String;

    /// 由角色使用该物品
    fn use_by(&self, character: &dyn Character, narrator: &mut dyn Narrator);

    /// 运行期能力查询：该物品能否装备
    fn as_equipable(&self) -> Option<&dyn Equipable> {
        None
    }
}

/// 可装备能力（与使用无关）
pub trait Equipable {
    fn equip(&self, character: &dyn Character, narrator: &mut dyn Narrator);
}

impl<I: Item + ?Sized> Item for Box<I> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn use_by(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        (**self).use_by(character, narrator)
    }

    fn as_equipable(&self) -> Option<&dyn Equipable> {
        (**self).as_equipable()
    }
}
