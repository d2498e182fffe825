//! SOLID 原则演示：战士、法师与他们的背包。
//!
//! 各子 crate 分别负责角色（`hero`）、物品（`items`）、背包（`bag`）和叙述输出（`narration`），
//! 这里负责把它们编排成两个固定的剧情。

pub mod manager;
pub mod scenario;
pub mod telemetry;

pub use manager::CharacterManager;
pub use scenario::{Scenario, equip_first, narrate_all, run_all, run_mage, run_warrior};
