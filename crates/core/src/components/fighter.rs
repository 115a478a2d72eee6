use serde::{Deserialize, Serialize};

/// Combat stats; equipment bonuses are added by the owner's lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    hp: i32,
    pub max_hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
}

impl Fighter {
    pub fn new(hp: i32, base_defense: i32, base_power: i32) -> Self {
        Self { hp, max_hp: hp, base_defense, base_power }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.clamp(0, self.max_hp);
    }

    /// Restores up to `amount` hp and returns how much was actually recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.hp >= self.max_hp || amount <= 0 {
            return 0;
        }
        let new_hp = (self.hp + amount).min(self.max_hp);
        let recovered = new_hp - self.hp;
        self.hp = new_hp;
        recovered
    }

    /// Returns true when this hit brought a living fighter to zero.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.set_hp(self.hp - amount.max(0));
        was_alive && !self.is_alive()
    }

    pub fn raise_max_hp(&mut self, amount: i32) {
        self.max_hp += amount;
        self.hp += amount;
    }
}
