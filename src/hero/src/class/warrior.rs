// src/hero/src/class/warrior.rs

use narration::{LineKind, Narrator};

use crate::{Character, Class};

/// 战士：近战角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warrior {
    name: String,
}

impl Warrior {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Character for Warrior {
    fn name(&self) -> &str {
        &self.name
    }

    fn use_ability(&self, narrator: &mut dyn Narrator) {
        tracing::trace!(hero = %self.name, "warrior ability");
        narrator.narrate(
            LineKind::Ability,
            format!("{} {}", self.name, Class::Warrior.flavor()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narration::MessageLog;

    #[test]
    fn warrior_swings_sword() {
        let warrior = Warrior::new("Aragorn");
        let mut log = MessageLog::new();
        warrior.use_ability(&mut log);
        assert_eq!(log.texts(), vec!["Aragorn swings a mighty sword!"]);
    }
}
