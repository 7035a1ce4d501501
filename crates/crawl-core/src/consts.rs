//! Default generation constants

/// Map dimensions
pub const MAP_WIDTH: i32 = 80;
pub const MAP_HEIGHT: i32 = 45;

/// Room limits
pub const MAX_ROOMS: u32 = 30;
pub const ROOM_MIN_SIZE: i32 = 6;
pub const ROOM_MAX_SIZE: i32 = 10;

/// Smallest outer room size that still leaves one floor tile inside the walls
pub const MIN_ROOM_SIZE: i32 = 2;

/// Monster limits
pub const MAX_MONSTERS_PER_ROOM: u32 = 2;

/// Probability that a spawned monster is the weaker kind
pub const WEAK_MONSTER_CHANCE: f64 = 0.8;

/// Probability that a tunnel runs horizontally before turning
pub const HORIZONTAL_FIRST_CHANCE: f64 = 0.5;
