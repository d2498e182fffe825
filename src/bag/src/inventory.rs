// src/bag/src/inventory.rs
use hero::Character;
use items::{Equipable, Item};
use narration::{LineKind, Narrator};

/// 通用库存（按插入顺序保存，只增不减）
///
/// 元素类型在编译期固定，放不进不符合类型的物品：
///
/// ```compile_fail
/// use bag::Inventory;
/// use items::{Spellbook, Sword};
/// use narration::MessageLog;
///
/// let mut swords: Inventory<Sword> = Inventory::new();
/// swords.add_item(Spellbook, &mut MessageLog::new());
/// ```
///
/// 需要混装时使用 `Inventory<Loot>`：
///
/// ```
/// use bag::Inventory;
/// use items::{Loot, Spellbook, Sword};
/// use narration::MessageLog;
///
/// let mut log = MessageLog::new();
/// let mut bag: Inventory<Loot> = Inventory::new();
/// bag.add_item(Box::new(Sword), &mut log);
/// bag.add_item(Box::new(Spellbook), &mut log);
/// assert_eq!(bag.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory<T: Item> {
    items: Vec<T>,
}

impl<T: Item> Default for Inventory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> Inventory<T> {
    /// 创建空库存
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 添加物品到末尾（总是成功）
    pub fn add_item(&mut self, item: T, narrator: &mut dyn Narrator) {
        let name = item.name();
        self.items.push(item);
        tracing::debug!(item = %name, size = self.items.len(), "item added");
        narrator.narrate(LineKind::Inventory, format!("Added {} to the inventory.", name));
    }

    /// 按插入顺序逐个使用全部物品
    pub fn use_all_items(&self, character: &dyn Character, narrator: &mut dyn Narrator) {
        tracing::debug!(hero = character.name(), count = self.items.len(), "using all items");
        for item in &self.items {
            item.use_by(character, narrator);
        }
    }

    /// 只读视图
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// 按迭代顺序找到第一件可装备的物品
    pub fn find_equipable(&self) -> Option<&dyn Equipable> {
        self.items.iter().find_map(|item| item.as_equipable())
    }

    /// 当前物品数量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Item> IntoIterator for &'a Inventory<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
