//! crawl-core: Procedural dungeon generation for a turn-based roguelike
//!
//! This crate carves rooms and tunnels into a tile map and populates it with
//! monsters. It performs no I/O; all randomness comes from an explicit
//! [`GameRng`] so a seed and a [`DungeonConfig`] always reproduce the same level.

pub mod config;
pub mod dungeon;
pub mod entity;
pub mod error;

mod consts;
mod rng;

pub use config::DungeonConfig;
pub use consts::*;
pub use error::{ConfigError, MapError};
pub use rng::GameRng;
