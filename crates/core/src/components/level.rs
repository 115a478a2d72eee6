use serde::{Deserialize, Serialize};

pub const LEVEL_UP_FACTOR: u32 = 150;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub current_level: u32,
    pub current_xp: u32,
    pub level_up_base: u32,
    pub level_up_factor: u32,
    /// Experience awarded to the player for killing this actor.
    pub xp_given: u32,
}

/// Attribute raised when the player spends a pending level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelUpChoice {
    /// +20 max hp, healed by the same amount.
    Constitution,
    /// +1 power.
    Strength,
    /// +1 defense.
    Agility,
}

impl Level {
    pub fn new(level_up_base: u32, xp_given: u32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base,
            level_up_factor: LEVEL_UP_FACTOR,
            xp_given,
        }
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.level_up_base + self.current_level * self.level_up_factor
    }

    pub fn requires_level_up(&self) -> bool {
        self.current_xp >= self.experience_to_next_level()
    }

    pub fn add_xp(&mut self, xp: u32) {
        self.current_xp += xp;
    }

    pub fn increase_level(&mut self) {
        self.current_xp -= self.experience_to_next_level();
        self.current_level += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_grows_with_level() {
        let mut level = Level::new(200, 0);
        assert_eq!(level.experience_to_next_level(), 350);

        level.add_xp(349);
        assert!(!level.requires_level_up());
        level.add_xp(11);
        assert!(level.requires_level_up());

        level.increase_level();
        assert_eq!(level.current_level, 2);
        assert_eq!(level.current_xp, 10);
        assert_eq!(level.experience_to_next_level(), 500);
    }
}
