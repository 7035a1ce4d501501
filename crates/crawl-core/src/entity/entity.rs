//! Entity instances placed on a map

use serde::{Deserialize, Serialize};

use super::MonsterKind;

/// Handle to an entity stored in a [`crate::dungeon::GameMap`]
///
/// Indexes the map's entity storage; entities are never removed during
/// generation so a handle stays valid for the life of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// RGB display color
pub type Color = (u8, u8, u8);

/// Anything that occupies a tile: the player or a monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: Color,
    pub name: String,
    /// Whether other entities can share this tile
    pub blocks_movement: bool,
    /// Monster kind, `None` for the player
    pub kind: Option<MonsterKind>,
}

impl Entity {
    /// Create an entity at the origin
    pub fn new(glyph: char, color: Color, name: impl Into<String>, blocks_movement: bool) -> Self {
        Self {
            x: 0,
            y: 0,
            glyph,
            color,
            name: name.into(),
            blocks_movement,
            kind: None,
        }
    }

    /// The player character
    pub fn player() -> Self {
        Self::new('@', (255, 255, 255), "Player", true)
    }

    /// Copy of this entity moved to `(x, y)`
    pub fn positioned(&self, x: i32, y: i32) -> Self {
        let mut clone = self.clone();
        clone.place(x, y);
        clone
    }

    pub fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    pub fn is_monster(&self) -> bool {
        self.kind.is_some()
    }
}
