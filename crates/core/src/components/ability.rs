//! Item effects shared by single-use consumables and cooldown-gated abilities.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{ActionResult, Impossible};
use crate::messages::{MessageLog, MessageTone};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Restores hp to the user.
    Healing { amount: i32 },
    /// Replaces the chosen actor's AI with a stumbling one for `turns` turns.
    Confusion { turns: u32 },
    /// Damages every actor within `radius` of the chosen tile.
    Fireball { damage: i32, radius: u32 },
    /// Strikes the nearest visible actor.
    Lightning { damage: i32, maximum_range: u32 },
    /// Hits the chosen actor when it is within range.
    Ranged { damage: i32, maximum_range: u32 },
    /// Burns every actor along a line toward the chosen tile.
    Beam { damage: i32, maximum_range: u32 },
    /// Jumps from actor to actor, each within `radius` of the previous hit.
    Chain { damage: i32, radius: u32 },
}

/// What the input layer must ask for before the effect can be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Targeting {
    None,
    Single,
    Area { radius: u32 },
}

impl Effect {
    pub fn targeting(self) -> Targeting {
        match self {
            Effect::Healing { .. } | Effect::Lightning { .. } | Effect::Chain { .. } => {
                Targeting::None
            }
            Effect::Confusion { .. } | Effect::Ranged { .. } | Effect::Beam { .. } => {
                Targeting::Single
            }
            Effect::Fireball { radius, .. } => Targeting::Area { radius },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub effect: Effect,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub effect: Effect,
    pub cooldown_turns: u32,
    current_cooldown: u32,
}

impl Ability {
    pub fn new(effect: Effect, cooldown_turns: u32) -> Self {
        Self { effect, cooldown_turns, current_cooldown: 0 }
    }

    pub fn current_cooldown(&self) -> u32 {
        self.current_cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    pub fn ensure_ready(&self, name: &str) -> ActionResult {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Impossible::new(format!(
                "{name} is still cooling down. ({})",
                self.current_cooldown
            )))
        }
    }

    pub fn start_cooldown(&mut self) {
        self.current_cooldown = self.cooldown_turns;
    }

    /// Advances the timer by one turn, announcing readiness when it reaches zero.
    pub fn cooldown(&mut self, name: &str, log: &mut MessageLog) {
        if self.current_cooldown == 0 {
            return;
        }
        self.current_cooldown -= 1;
        trace!("{name} cooldown now {}", self.current_cooldown);
        if self.current_cooldown == 0 {
            log.add(format!("{name} is ready to use again."), MessageTone::StatusEffect);
        }
    }
}
