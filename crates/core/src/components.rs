//! Capability components attached to actors and items.
//! This module exists so per-entity rules (hp bounds, inventory capacity, equip conflicts,
//! cooldown timers) stay testable without an engine.
//! It does not own cross-entity resolution; the `game` module drives that.

pub mod ability;
pub mod ai;
pub mod equipment;
pub mod fighter;
pub mod inventory;
pub mod level;

pub use ability::{Ability, Consumable, Effect, Targeting};
pub use ai::Ai;
pub use equipment::{EquipChange, Equipment, EquipmentSlot, Equippable, HandType};
pub use fighter::Fighter;
pub use inventory::Inventory;
pub use level::{Level, LevelUpChoice};
