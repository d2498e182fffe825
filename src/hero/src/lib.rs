// src/hero/src/lib.rs
//! 角色系统
//!
//! 角色只有两种能力：拥有名字、施展技能。新职业只需实现 [`Character`]，
//! 不必修改已有职业。

use std::fmt;

use narration::Narrator;

pub mod class;

pub use class::{Class, mage::Mage, warrior::Warrior};

/// 可操控角色的公共接口
pub trait Character: fmt::Debug {
    /// 显示名称
    fn name(&self) -> &str;

    /// 施展职业技能，输出一行描述
    fn use_ability(&self, narrator: &mut dyn Narrator);
}

impl<C: Character + ?Sized> Character for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn use_ability(&self, narrator: &mut dyn Narrator) {
        (**self).use_ability(narrator)
    }
}
