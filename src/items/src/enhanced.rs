// src/items/src/enhanced.rs
//! 强化装饰器
//!
//! 包装任意物品：名字加上 `Enhanced ` 前缀，使用时先输出一行强化描述，
//! 再交给内部物品自己处理。包装后的物品可以放在任何接受 [`Item`] 的地方。
//! 包装不转发 [`crate::Equipable`]，强化护甲不能通过能力查询找到。

use hero::Character;
use narration::{LineKind, Narrator};

use crate::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhanced<I: Item> {
    inner: I,
}

impl<I: Item> Enhanced<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: Item> Item for Enhanced<I> {
    fn name(&self) -> String {
        format!("Enhanced {}", self.inner.name())
    }

    fn use_by(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        narrator.narrate(
            LineKind::Use,
            format!(
                "{} uses the {} with extra power!",
                character.name(),
                self.name()
            ),
        );
        self.inner.use_by(character, narrator);
    }
}
