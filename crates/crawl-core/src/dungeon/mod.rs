//! Dungeon system
//!
//! Contains the tile map, room geometry, tunnels, and level generation.

mod generation;
mod map;
mod room;
mod tile;
mod tunnel;

pub use generation::{generate_dungeon, DungeonGenerator, Layout, PLAYER_ID};
pub use map::GameMap;
pub use room::Room;
pub use tile::TileKind;
pub use tunnel::{l_path, tunnel_between, Bresenham, Corner, PathTracer, Point};
