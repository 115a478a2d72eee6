//! Monster and item population for a freshly carved room.

use log::trace;

use super::model::{ActorSpawn, GeneratedFloor, ItemSpawn};
use super::room::RectangularRoom;
use super::weights::{entities_at_random, max_value_for_floor};
use crate::content::tables::{
    ENEMY_CHANCES, ITEM_CHANCES, MAX_ITEMS_BY_FLOOR, MAX_MONSTERS_BY_FLOOR,
};
use crate::rng::GameRng;
use crate::types::{ActorKind, ItemKind, Pos};

enum Pending {
    Actor(ActorKind),
    Item(ItemKind),
}

/// Rolls this floor's monster and item counts for `room` and records a spawn for each
/// one that lands on a free interior tile. Draws that hit an occupied tile are dropped.
pub(super) fn place_entities(
    floor: &mut GeneratedFloor,
    room: &RectangularRoom,
    floor_number: u32,
    rng: &mut GameRng,
) {
    let monster_cap = max_value_for_floor(MAX_MONSTERS_BY_FLOOR, floor_number);
    let item_cap = max_value_for_floor(MAX_ITEMS_BY_FLOOR, floor_number);
    let monster_count = rng.range_inclusive(0, monster_cap as i32) as usize;
    let item_count = rng.range_inclusive(0, item_cap as i32) as usize;

    let monsters = entities_at_random(ENEMY_CHANCES, monster_count, floor_number, rng);
    let items = entities_at_random(ITEM_CHANCES, item_count, floor_number, rng);

    let pending =
        monsters.into_iter().map(Pending::Actor).chain(items.into_iter().map(Pending::Item));
    for entity in pending {
        let pos = Pos::new(
            rng.range_inclusive(room.x1 + 1, room.x2 - 1),
            rng.range_inclusive(room.y1 + 1, room.y2 - 1),
        );
        if floor.is_occupied(pos) {
            trace!("spawn at {pos:?} skipped: tile occupied");
            continue;
        }
        match entity {
            Pending::Actor(kind) => floor.actor_spawns.push(ActorSpawn { kind, pos }),
            Pending::Item(kind) => floor.item_spawns.push(ItemSpawn { kind, pos }),
        }
    }
}
