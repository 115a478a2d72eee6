//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating map and actor setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::content::spawn_actor;

pub(super) const ARENA_SEED: u64 = 0x5eed;

/// 20x12 map of solid rock with a lit 18x10 floor interior; the origin sits near the middle.
pub(super) fn open_room_map() -> (GameMap, Pos) {
    let mut map = GameMap::new(20, 12);
    for y in 1..11 {
        for x in 1..19 {
            map.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
    (map, Pos { y: 6, x: 10 })
}

/// A game on `open_room_map` holding only the player, who carries nothing.
pub(super) fn arena_game() -> Game {
    let config = GameConfig::default();
    let (map, origin) = open_room_map();
    let mut actors = SlotMap::with_key();
    let player_id = actors.insert(spawn_player(&config.player, origin));
    actors[player_id].id = player_id;
    let state = GameState {
        map,
        actors,
        items: SlotMap::with_key(),
        player_id,
        floor_number: 1,
        turn: 0,
        messages: MessageLog::default(),
    };
    Game::from_state(state, ARENA_SEED, config).expect("arena state is valid")
}

pub(super) fn add_monster(game: &mut Game, kind: ActorKind, pos: Pos) -> EntityId {
    game.state.add_actor(spawn_actor(kind, pos))
}

pub(super) fn place_item(game: &mut Game, kind: ItemKind, pos: Pos) -> ItemId {
    game.state.add_item(spawn_item(kind, ItemLocation::OnMap(pos)))
}

/// Puts a fresh item straight into the player's pack.
pub(super) fn give_item(game: &mut Game, kind: ItemKind) -> ItemId {
    let player_id = game.state.player_id;
    let item_id = game.state.add_item(spawn_item(kind, ItemLocation::Carried(player_id)));
    game.state.player_mut().inventory.add(item_id).expect("test pack has room");
    item_id
}

/// Strips every monster's AI so only the player acts.
pub(super) fn freeze_monsters(game: &mut Game) {
    let player_id = game.state.player_id;
    for actor in game.state.actors.values_mut().filter(|actor| actor.id != player_id) {
        actor.ai = None;
    }
}
