//! Session configuration: map dimensions, room sizing, sight radius, and player stats.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Fewer attempts than this can leave a floor without a staircase too often.
pub const MIN_MAX_ROOMS: u32 = 2;
/// Smallest room that still has an interior tile inside its wall border.
pub const MIN_ROOM_SIZE: u32 = 3;
/// Keeps tile coordinates and squared sight distances inside `i32`.
pub const MAX_MAP_SIDE: u32 = 4096;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: u32,
    pub map_height: u32,
    pub max_rooms: u32,
    pub room_min_size: u32,
    pub room_max_size: u32,
    pub fov_radius: u32,
    pub player: PlayerConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
    pub inventory_capacity: usize,
    pub level_up_base: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 43,
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
            fov_radius: 8,
            player: PlayerConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { hp: 30, base_defense: 2, base_power: 5, inventory_capacity: 26, level_up_base: 200 }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_rooms < MIN_MAX_ROOMS {
            return Err(GameError::InvalidConfig(format!(
                "max_rooms must be at least {MIN_MAX_ROOMS}, got {}",
                self.max_rooms
            )));
        }
        if self.room_min_size < MIN_ROOM_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "room_min_size must be at least {MIN_ROOM_SIZE}, got {}",
                self.room_min_size
            )));
        }
        if self.room_min_size > self.room_max_size {
            return Err(GameError::InvalidConfig(format!(
                "room_min_size {} exceeds room_max_size {}",
                self.room_min_size, self.room_max_size
            )));
        }
        // Rooms are placed with x in [0, width - size - 1], so the largest room needs
        // one spare column and row.
        if self.room_max_size + 1 > self.map_width || self.room_max_size + 1 > self.map_height {
            return Err(GameError::InvalidConfig(format!(
                "room_max_size {} does not fit a {}x{} map",
                self.room_max_size, self.map_width, self.map_height
            )));
        }
        if self.map_width > MAX_MAP_SIDE || self.map_height > MAX_MAP_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "map sides must be at most {MAX_MAP_SIDE}, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        let longest_side = self.map_width.max(self.map_height);
        if self.fov_radius > longest_side {
            return Err(GameError::InvalidConfig(format!(
                "fov_radius {} exceeds the longest map side {longest_side}",
                self.fov_radius
            )));
        }
        if self.player.hp <= 0 {
            return Err(GameError::InvalidConfig("player hp must be positive".to_string()));
        }
        Ok(())
    }
}
