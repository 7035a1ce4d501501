//! Dungeon generation parameters

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{
    MAP_HEIGHT, MAP_WIDTH, MAX_MONSTERS_PER_ROOM, MAX_ROOMS, MIN_ROOM_SIZE, ROOM_MAX_SIZE,
    ROOM_MIN_SIZE,
};

/// Parameters for a single call to the dungeon generator
///
/// Missing fields fall back to the defaults when loaded from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Number of room placement attempts (not a guaranteed room count)
    pub max_rooms: u32,
    /// Smallest outer width/height of a room, walls included
    pub room_min_size: i32,
    /// Largest outer width/height of a room, walls included
    pub room_max_size: i32,
    pub map_width: i32,
    pub map_height: i32,
    /// Upper bound on the monsters sampled for each accepted room
    pub max_monsters_per_room: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            max_rooms: MAX_ROOMS,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            max_monsters_per_room: MAX_MONSTERS_PER_ROOM,
        }
    }
}

impl DungeonConfig {
    /// Check that every sampling range the generator uses is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rooms == 0 {
            return Err(ConfigError::ZeroRooms);
        }
        if self.map_width <= 0 || self.map_height <= 0 {
            return Err(ConfigError::NonPositiveMapSize {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.room_min_size < MIN_ROOM_SIZE {
            return Err(ConfigError::RoomTooSmall {
                min: self.room_min_size,
                required: MIN_ROOM_SIZE,
            });
        }
        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::InvertedRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        // The top-left corner is drawn from 0..=dim - size - 1.
        if self.room_max_size >= self.map_width || self.room_max_size >= self.map_height {
            return Err(ConfigError::RoomTooLarge {
                size: self.room_max_size,
                width: self.map_width,
                height: self.map_height,
            });
        }
        Ok(())
    }
}
