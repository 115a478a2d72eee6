//! Procedural floor generation split into geometry, weighting, placement, and orchestration.

pub mod model;
pub mod room;
pub mod weights;

mod generator;
mod spawns;

use log::warn;

pub use generator::generate_dungeon;
pub use model::{ActorSpawn, GeneratedFloor, ItemSpawn};
pub use room::{RectangularRoom, tunnel_between};
pub use weights::{entities_at_random, max_value_for_floor};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::rng::GameRng;

pub const MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Generates floors from the shared stream until one is playable.
pub fn generate_floor(
    config: &GameConfig,
    floor_number: u32,
    rng: &mut GameRng,
) -> Result<GeneratedFloor, GameError> {
    config.validate()?;
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let floor = generate_dungeon(config, floor_number, rng);
        if floor.is_playable() {
            return Ok(floor);
        }
        warn!("floor {floor_number} attempt {attempt} had no staircase, regenerating");
    }
    Err(GameError::GenerationFailed { attempts: MAX_GENERATION_ATTEMPTS })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_floor_returns_a_playable_floor() {
        let mut rng = GameRng::seed_from_u64(123);
        let floor =
            generate_floor(&GameConfig::default(), 2, &mut rng).expect("default map fits rooms");
        assert!(floor.is_playable());
        assert_eq!(floor.floor_number, 2);
    }

    #[test]
    fn cramped_map_reports_generation_failure() {
        // A 7x7 map can hold exactly one 6x6 room, so no staircase is ever placed.
        let config = GameConfig {
            map_width: 7,
            map_height: 7,
            room_min_size: 6,
            room_max_size: 6,
            fov_radius: 6,
            ..GameConfig::default()
        };
        config.validate().expect("one room still fits");
        let mut rng = GameRng::seed_from_u64(9);
        assert!(matches!(
            generate_floor(&config, 1, &mut rng),
            Err(GameError::GenerationFailed { attempts: MAX_GENERATION_ATTEMPTS })
        ));
    }

    #[test]
    fn unvalidated_config_is_refused_before_generating() {
        let config = GameConfig { room_min_size: 12, room_max_size: 8, ..GameConfig::default() };
        let mut rng = GameRng::seed_from_u64(3);
        assert!(matches!(generate_floor(&config, 1, &mut rng), Err(GameError::InvalidConfig(_))));
    }
}
