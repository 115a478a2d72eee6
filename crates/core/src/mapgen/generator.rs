//! Room-and-corridor floor generation.

use log::debug;

use super::model::GeneratedFloor;
use super::room::{RectangularRoom, tunnel_between};
use super::spawns::place_entities;
use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::types::TileKind;

/// Tries `max_rooms` random rooms, keeping those that overlap nothing already placed.
///
/// The first kept room holds the player start. Every later room is tunneled to the
/// previous one and takes over the single down staircase at its center.
pub fn generate_dungeon(
    config: &GameConfig,
    floor_number: u32,
    rng: &mut GameRng,
) -> GeneratedFloor {
    let map_width = config.map_width as i32;
    let map_height = config.map_height as i32;
    let mut floor =
        GeneratedFloor::blank(floor_number, config.map_width as usize, config.map_height as usize);

    for _ in 0..config.max_rooms {
        let room_width =
            rng.range_inclusive(config.room_min_size as i32, config.room_max_size as i32);
        let room_height =
            rng.range_inclusive(config.room_min_size as i32, config.room_max_size as i32);

        let x = rng.range_inclusive(0, map_width - room_width - 1);
        let y = rng.range_inclusive(0, map_height - room_height - 1);
        let new_room = RectangularRoom::new(x, y, room_width, room_height);

        if floor.rooms.iter().any(|other_room| new_room.intersects(other_room)) {
            continue;
        }

        for pos in new_room.inner_positions() {
            floor.set_tile(pos, TileKind::Floor);
        }

        match floor.rooms.last() {
            None => floor.player_start = Some(new_room.center()),
            Some(previous_room) => {
                let previous_center = previous_room.center();
                for pos in tunnel_between(previous_center, new_room.center(), rng) {
                    floor.set_tile(pos, TileKind::Floor);
                }
                if let Some(old_stairs) = floor.down_stairs.take() {
                    floor.set_tile(old_stairs, TileKind::Floor);
                }
                floor.set_tile(new_room.center(), TileKind::DownStairs);
                floor.down_stairs = Some(new_room.center());
            }
        }

        place_entities(&mut floor, &new_room, floor_number, rng);
        floor.rooms.push(new_room);
    }

    debug!(
        "floor {floor_number}: {} rooms, {} actors, {} items",
        floor.rooms.len(),
        floor.actor_spawns.len(),
        floor.item_spawns.len()
    );
    floor
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    use super::*;
    use crate::types::Pos;

    fn generate(seed: u64, floor_number: u32) -> GeneratedFloor {
        let mut rng = GameRng::seed_from_u64(seed);
        generate_dungeon(&GameConfig::default(), floor_number, &mut rng)
    }

    #[test]
    fn same_inputs_produce_byte_identical_floor_output() {
        let a = generate(123_456, 2);
        let b = generate(123_456, 2);
        assert_eq!(xxh3_64(&a.canonical_bytes()), xxh3_64(&b.canonical_bytes()));
    }

    #[test]
    fn different_seeds_change_floor_output() {
        assert_ne!(generate(1, 1).canonical_bytes(), generate(2, 1).canonical_bytes());
    }

    #[test]
    fn rooms_never_overlap_and_stay_inside_the_map() {
        let floor = generate(77_777, 3);
        assert!(!floor.rooms.is_empty());
        for (index, room) in floor.rooms.iter().enumerate() {
            assert!(room.x1 >= 0 && room.y1 >= 0);
            assert!(room.x2 < floor.width as i32 && room.y2 < floor.height as i32);
            for other in &floor.rooms[index + 1..] {
                assert!(!room.intersects(other));
            }
        }
    }

    #[test]
    fn exactly_one_staircase_in_a_later_room_center() {
        for seed in [11_u64, 2_024, 77_777, 909_090] {
            let floor = generate(seed, 5);
            let stairs: Vec<Pos> = (0..floor.height)
                .flat_map(|y| (0..floor.width).map(move |x| Pos::new(x as i32, y as i32)))
                .filter(|&pos| floor.tile_at(pos) == TileKind::DownStairs)
                .collect();

            if floor.rooms.len() < 2 {
                assert!(stairs.is_empty());
                continue;
            }
            assert_eq!(stairs.len(), 1, "seed {seed}");
            assert_eq!(floor.down_stairs, Some(stairs[0]));
            assert_eq!(floor.rooms.last().map(|room| room.center()), floor.down_stairs);
            assert_eq!(floor.player_start, Some(floor.rooms[0].center()));
        }
    }

    #[test]
    fn spawns_sit_on_walkable_tiles_away_from_the_player() {
        let floor = generate(31_337, 14);
        for spawn in &floor.actor_spawns {
            assert!(floor.tile_at(spawn.pos).walkable());
            assert_ne!(Some(spawn.pos), floor.player_start);
        }
        for spawn in &floor.item_spawns {
            assert!(floor.tile_at(spawn.pos).walkable());
        }
    }

    #[test]
    fn single_attempt_yields_one_room_and_no_stairs() {
        let config = GameConfig { max_rooms: 1, ..GameConfig::default() };
        let mut rng = GameRng::seed_from_u64(5);
        let floor = generate_dungeon(&config, 1, &mut rng);
        assert_eq!(floor.rooms.len(), 1);
        assert!(floor.player_start.is_some());
        assert_eq!(floor.down_stairs, None);
        assert!(!floor.is_playable());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]
        #[test]
        fn generated_floors_keep_walkable_tiles_connected(
            seed in any::<u64>(),
            floor_number in 1_u32..=14,
        ) {
            let generated = generate(seed, floor_number);
            prop_assert!(
                all_walkable_tiles_connected(&generated),
                "seed={seed}, floor={floor_number} should produce a connected walkable layout"
            );
        }
    }

    fn all_walkable_tiles_connected(generated: &GeneratedFloor) -> bool {
        let mut walkable_positions = Vec::new();
        for y in 0..generated.height {
            for x in 0..generated.width {
                let pos = Pos::new(x as i32, y as i32);
                if generated.tile_at(pos).walkable() {
                    walkable_positions.push(pos);
                }
            }
        }

        let Some(start) = walkable_positions.first().copied() else {
            return true;
        };

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in [pos.offset(0, -1), pos.offset(1, 0), pos.offset(0, 1), pos.offset(-1, 0)] {
                if seen.contains(&next) || !generated.tile_at(next).walkable() {
                    continue;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }

        seen.len() == walkable_positions.len()
    }
}
