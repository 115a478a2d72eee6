//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.
//! It does not own persistence or message history.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::components::Ai;

impl Game {
    /// Digest of the simulation-relevant state. Equal seeds fed equal actions must agree.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.state.turn);
        hasher.write_u32(self.state.floor_number);
        for tile in &self.state.map.tiles {
            hasher.write_u8(*tile as u8);
        }

        for actor in self.state.actors.values() {
            hasher.write_u8(actor.kind as u8);
            hasher.write_i32(actor.pos.x);
            hasher.write_i32(actor.pos.y);
            hasher.write_i32(actor.fighter.hp());
            hasher.write_i32(actor.fighter.max_hp);
            hasher.write_u8(match &actor.ai {
                None => 0,
                Some(Ai::Hostile { .. }) => 1,
                Some(Ai::Confused { .. }) => 2,
            });
        }
        let player = self.state.player();
        hasher.write_u32(player.level.current_level);
        hasher.write_u32(player.level.current_xp);

        for item in self.state.items.values() {
            hasher.write_u8(item.kind as u8);
            match item.location {
                ItemLocation::OnMap(pos) => {
                    hasher.write_u8(0);
                    hasher.write_i32(pos.x);
                    hasher.write_i32(pos.y);
                }
                ItemLocation::Carried(_) => hasher.write_u8(1),
            }
            if let Some(ability) = &item.ability {
                hasher.write_u32(ability.current_cooldown());
            }
        }
        hasher.finish()
    }
}
