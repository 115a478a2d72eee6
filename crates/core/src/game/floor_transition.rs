//! Floor-change mechanics and generated floor state installation.
//! This module exists to isolate descent state mutation and spawn initialization rules.
//! It does not own the stairs action validation or turn flow.

use log::warn;

use super::*;
use crate::content::spawn_actor;
use crate::mapgen::GeneratedFloor;

impl Game {
    /// Generates the next floor from the session stream and moves the player onto it.
    pub(super) fn descend(&mut self) -> ActionResult {
        let next_floor = self.state.floor_number + 1;
        let floor = match generate_floor(&self.config, next_floor, &mut self.rng) {
            Ok(floor) => floor,
            Err(err) => {
                warn!("descent to floor {next_floor} failed: {err}");
                return Err(Impossible::new("The way down is blocked."));
            }
        };
        self.install_floor(floor);
        info!("player reached floor {next_floor}");
        Ok(())
    }

    /// Replaces the map and its population with `floor`. The player and everything the
    /// player carries survive; the rest of the old floor is discarded.
    pub(super) fn install_floor(&mut self, floor: GeneratedFloor) {
        let player_id = self.state.player_id;
        self.state.actors.retain(|id, _| id == player_id);
        self.state.items.retain(|_, item| item.location == ItemLocation::Carried(player_id));

        let mut map = GameMap::new(floor.width, floor.height);
        map.tiles = floor.tiles;
        map.downstairs = floor.down_stairs;
        self.state.map = map;

        if let Some(start) = floor.player_start {
            self.state.actors[player_id].pos = start;
        }
        for spawn in floor.actor_spawns {
            self.state.add_actor(spawn_actor(spawn.kind, spawn.pos));
        }
        for spawn in floor.item_spawns {
            self.state.add_item(spawn_item(spawn.kind, ItemLocation::OnMap(spawn.pos)));
        }

        self.state.floor_number = floor.floor_number;
        self.update_fov();
        debug!(
            "installed floor {} with {} actors and {} items",
            floor.floor_number,
            self.state.actors.len(),
            self.state.items.len()
        );
    }
}
