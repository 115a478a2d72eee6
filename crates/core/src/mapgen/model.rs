//! Public data models for generated floors, actor spawns, and item spawns.

use serde::{Deserialize, Serialize};

use super::room::RectangularRoom;
use crate::types::{ActorKind, ItemKind, Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSpawn {
    pub kind: ActorKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub pos: Pos,
}

/// Generator output, not yet bound to any live entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFloor {
    pub floor_number: u32,
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub rooms: Vec<RectangularRoom>,
    pub player_start: Option<Pos>,
    pub down_stairs: Option<Pos>,
    pub actor_spawns: Vec<ActorSpawn>,
    pub item_spawns: Vec<ItemSpawn>,
}

impl GeneratedFloor {
    pub(super) fn blank(floor_number: u32, width: usize, height: usize) -> Self {
        Self {
            floor_number,
            width,
            height,
            tiles: vec![TileKind::Wall; width * height],
            rooms: Vec::new(),
            player_start: None,
            down_stairs: None,
            actor_spawns: Vec::new(),
            item_spawns: Vec::new(),
        }
    }

    /// A floor can host a session only with somewhere to start and a way down.
    pub fn is_playable(&self) -> bool {
        self.player_start.is_some() && self.down_stairs.is_some()
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y * self.width + x]
    }

    pub(super) fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height {
            return;
        }
        self.tiles[(pos.y as usize) * self.width + (pos.x as usize)] = tile;
    }

    /// True when the player start or any recorded spawn already sits on `pos`.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.player_start == Some(pos)
            || self.actor_spawns.iter().any(|spawn| spawn.pos == pos)
            || self.item_spawns.iter().any(|spawn| spawn.pos == pos)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.floor_number.to_le_bytes());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for &tile in &self.tiles {
            bytes.push(tile as u8);
        }
        for pos in [self.player_start, self.down_stairs] {
            match pos {
                Some(pos) => {
                    bytes.push(1);
                    bytes.extend(pos.y.to_le_bytes());
                    bytes.extend(pos.x.to_le_bytes());
                }
                None => bytes.push(0),
            }
        }

        bytes.extend((self.actor_spawns.len() as u32).to_le_bytes());
        for spawn in &self.actor_spawns {
            bytes.push(spawn.kind as u8);
            bytes.extend(spawn.pos.y.to_le_bytes());
            bytes.extend(spawn.pos.x.to_le_bytes());
        }

        bytes.extend((self.item_spawns.len() as u32).to_le_bytes());
        for spawn in &self.item_spawns {
            bytes.push(spawn.kind as u8);
            bytes.extend(spawn.pos.y.to_le_bytes());
            bytes.extend(spawn.pos.x.to_le_bytes());
        }

        bytes
    }
}
