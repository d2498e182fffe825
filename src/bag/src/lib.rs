// src/bag/src/lib.rs
//! 背包系统
//!
//! [`Inventory`] 是按单一物品类型约束的有序容器；
//! [`InventoryService`] 把它包装成 [`ItemService`] 接口，供上层只依赖抽象。

pub mod inventory;
pub mod service;

pub use inventory::Inventory;
pub use service::{InventoryService, ItemService};
