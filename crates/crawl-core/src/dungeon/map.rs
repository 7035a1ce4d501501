//! Game map: tile grid plus the entities standing on it

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::TileKind;
use crate::entity::{Entity, EntityId};
use crate::error::MapError;

/// Create a grid of walls, indexed `[x][y]`
fn wall_grid(width: i32, height: i32) -> Vec<Vec<TileKind>> {
    vec![vec![TileKind::Wall; height.max(0) as usize]; width.max(0) as usize]
}

/// Serialized form of [`GameMap`], checked before it becomes one
#[derive(Deserialize)]
struct GameMapData {
    width: i32,
    height: i32,
    tiles: Vec<Vec<TileKind>>,
    entities: Vec<Entity>,
}

impl TryFrom<GameMapData> for GameMap {
    type Error = MapError;

    fn try_from(data: GameMapData) -> Result<Self, Self::Error> {
        if data.tiles.len() != data.width.max(0) as usize {
            return Err(MapError::ColumnCount {
                width: data.width,
                columns: data.tiles.len(),
            });
        }
        if let Some((column, col)) = data
            .tiles
            .iter()
            .enumerate()
            .find(|(_, col)| col.len() != data.height.max(0) as usize)
        {
            return Err(MapError::RaggedColumn {
                width: data.width,
                height: data.height,
                column,
                rows: col.len(),
            });
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            tiles: data.tiles,
            entities: data.entities,
        })
    }
}

/// Complete map structure
///
/// `tiles` always has `width` columns of `height` rows; deserializing checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameMapData")]
pub struct GameMap {
    width: i32,
    height: i32,

    /// Map tiles, column-major
    tiles: Vec<Vec<TileKind>>,

    /// All entities on this map, in insertion order
    entities: Vec<Entity>,
}

impl GameMap {
    /// Create a map filled with walls holding `entities`
    pub fn new(width: i32, height: i32, entities: Vec<Entity>) -> Self {
        Self {
            width,
            height,
            tiles: wall_grid(width, height),
            entities,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if position is inside the map
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Tile at position, `None` outside the map
    pub fn tile(&self, x: i32, y: i32) -> Option<TileKind> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[x as usize][y as usize])
    }

    /// Set a single tile. Writes outside the map are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileKind) {
        if self.in_bounds(x, y) {
            self.tiles[x as usize][y as usize] = tile;
        }
    }

    /// Set every tile in the half-open rectangle `xs` x `ys`.
    ///
    /// The rectangle is clipped to the map.
    pub fn fill_rect(&mut self, xs: Range<i32>, ys: Range<i32>, tile: TileKind) {
        let x0 = xs.start.max(0);
        let x1 = xs.end.min(self.width);
        let y0 = ys.start.max(0);
        let y1 = ys.end.min(self.height);
        for x in x0..x1 {
            for y in y0..y1 {
                self.tiles[x as usize][y as usize] = tile;
            }
        }
    }

    /// Check if position is walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|t| t.walkable())
    }

    /// Count of tiles of the given kind
    pub fn count_tiles(&self, kind: TileKind) -> usize {
        self.tiles
            .iter()
            .flat_map(|col| col.iter())
            .filter(|&&t| t == kind)
            .count()
    }

    /// Add an entity to the map
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    /// Get entity by ID
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Get mutable entity by ID
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entities that are monsters, with their handles
    pub fn monsters(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_monster())
            .map(|(i, e)| (EntityId(i as u32), e))
    }

    /// First entity (in insertion order) standing at position
    pub fn entity_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|e| e.is_at(x, y))
            .map(|i| EntityId(i as u32))
    }

    /// First entity at position that blocks movement
    pub fn blocking_entity_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|e| e.blocks_movement && e.is_at(x, y))
            .map(|i| EntityId(i as u32))
    }

    /// Plain-text dump, one line per row, entity glyphs drawn over tiles
    pub fn to_ascii(&self) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| (0..self.width).map(|x| self.tiles[x as usize][y as usize].symbol()).collect())
            .collect();
        for e in &self.entities {
            if self.in_bounds(e.x, e.y) {
                rows[e.y as usize][e.x as usize] = e.glyph;
            }
        }
        let mut out = String::with_capacity(((self.width + 1) * self.height.max(0)) as usize);
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
