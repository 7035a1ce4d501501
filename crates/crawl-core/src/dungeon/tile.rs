//! Map tile kinds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain of a single grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Wall = 0,
    Floor = 1,
}

impl TileKind {
    /// Check if this is passable (can walk through)
    pub const fn walkable(&self) -> bool {
        matches!(self, TileKind::Floor)
    }

    /// Check if light and sight pass through
    pub const fn transparent(&self) -> bool {
        matches!(self, TileKind::Floor)
    }

    /// Get the display character for this tile kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
        }
    }
}
