// src/hero/src/class.rs

use strum_macros::{Display, EnumIter};

pub mod mage;
pub mod warrior;

use crate::Character;
use mage::Mage;
use warrior::Warrior;

/// 角色职业枚举
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Class {
    #[default]
    Warrior, // 战士

    Mage, // 法师
}

impl Class {
    /// 创建该职业的角色
    pub fn spawn(self, name: impl Into<String>) -> Box<dyn Character> {
        match self {
            Class::Warrior => Box::new(Warrior::new(name)),
            Class::Mage => Box::new(Mage::new(name)),
        }
    }

    /// 技能描述（接在角色名之后）
    pub fn flavor(self) -> &'static str {
        match self {
            Class::Warrior => "swings a mighty sword!",
            Class::Mage => "casts a fireball spell!",
        }
    }
}
