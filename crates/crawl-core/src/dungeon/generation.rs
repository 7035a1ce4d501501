//! Level generation
//!
//! Places non-overlapping rooms by rejection sampling, links each new room to
//! the previous one with an L-shaped tunnel, and scatters monsters.

use log::{debug, info, trace};

use crate::config::DungeonConfig;
use crate::entity::{Entity, EntityId, EntitySpawner, MonsterFactory, MonsterKind};
use crate::error::ConfigError;
use crate::rng::GameRng;

use super::room::Room;
use super::tunnel::{tunnel_between, Bresenham, PathTracer};
use super::{GameMap, TileKind};

/// The player is always the first entity on a generated map
pub const PLAYER_ID: EntityId = EntityId(0);

/// A generated map together with the rooms that shaped it
#[derive(Debug, Clone)]
pub struct Layout {
    pub map: GameMap,
    /// Accepted rooms in placement order
    pub rooms: Vec<Room>,
}

/// Dungeon generator with its line tracer and monster spawner
#[derive(Debug, Clone)]
pub struct DungeonGenerator<T = Bresenham, S = MonsterFactory> {
    config: DungeonConfig,
    tracer: T,
    spawner: S,
}

impl DungeonGenerator {
    /// Create a generator, rejecting configs with empty sampling ranges
    pub fn new(config: DungeonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tracer: Bresenham,
            spawner: MonsterFactory,
        })
    }
}

impl<T: PathTracer, S: EntitySpawner> DungeonGenerator<T, S> {
    pub fn with_tracer<U: PathTracer>(self, tracer: U) -> DungeonGenerator<U, S> {
        DungeonGenerator {
            config: self.config,
            tracer,
            spawner: self.spawner,
        }
    }

    pub fn with_spawner<U: EntitySpawner>(self, spawner: U) -> DungeonGenerator<T, U> {
        DungeonGenerator {
            config: self.config,
            tracer: self.tracer,
            spawner,
        }
    }

    /// Generate a new dungeon map
    pub fn generate(&self, player: Entity, rng: &mut GameRng) -> GameMap {
        self.generate_layout(player, rng).map
    }

    /// Generate a new dungeon map and keep the accepted room list
    pub fn generate_layout(&self, player: Entity, rng: &mut GameRng) -> Layout {
        let cfg = &self.config;
        let mut map = GameMap::new(cfg.map_width, cfg.map_height, vec![player]);
        let mut rooms: Vec<Room> = Vec::new();

        for attempt in 0..cfg.max_rooms {
            let room_width = rng.range_inclusive(cfg.room_min_size, cfg.room_max_size);
            let room_height = rng.range_inclusive(cfg.room_min_size, cfg.room_max_size);

            // Leave a one-tile margin on the far edges
            let x = rng.range_inclusive(0, map.width() - room_width - 1);
            let y = rng.range_inclusive(0, map.height() - room_height - 1);

            let new_room = Room::new(x, y, room_width, room_height);

            if rooms.iter().any(|other| new_room.intersects(other)) {
                debug!("attempt {attempt}: rejected {room_width}x{room_height} room at ({x}, {y})");
                continue;
            }
            debug!("attempt {attempt}: accepted {room_width}x{room_height} room at ({x}, {y})");

            let (xs, ys) = new_room.inner_region();
            map.fill_rect(xs, ys, TileKind::Floor);

            match rooms.last() {
                None => {
                    // The first room, where the player starts
                    let (cx, cy) = new_room.center();
                    if let Some(player) = map.entity_mut(PLAYER_ID) {
                        player.place(cx, cy);
                    }
                }
                Some(previous) => {
                    for (tx, ty) in
                        tunnel_between(previous.center(), new_room.center(), rng, &self.tracer)
                    {
                        map.set_tile(tx, ty, TileKind::Floor);
                    }
                }
            }

            place_entities(&new_room, &mut map, cfg.max_monsters_per_room, rng, &self.spawner);

            rooms.push(new_room);
        }

        info!(
            "generated {}x{} map: {} of {} rooms placed, {} monsters",
            cfg.map_width,
            cfg.map_height,
            rooms.len(),
            cfg.max_rooms,
            map.monsters().count()
        );

        Layout { map, rooms }
    }
}

/// Generate a new dungeon map with the default tracer and spawner
pub fn generate_dungeon(
    config: &DungeonConfig,
    player: Entity,
    rng: &mut GameRng,
) -> Result<GameMap, ConfigError> {
    Ok(DungeonGenerator::new(*config)?.generate(player, rng))
}

/// Monsters to attempt in one room, uniform over `0..=max_monsters`
fn monster_count(rng: &mut GameRng, max_monsters: u32) -> u32 {
    rng.range_u32(0, max_monsters)
}

/// Place up to `max_monsters` monsters on free tiles inside the room.
///
/// Occupied picks are skipped, not retried. Returns the number spawned.
fn place_entities(
    room: &Room,
    map: &mut GameMap,
    max_monsters: u32,
    rng: &mut GameRng,
    spawner: &dyn EntitySpawner,
) -> u32 {
    let mut spawned = 0;

    for _ in 0..monster_count(rng, max_monsters) {
        let x = rng.range_inclusive(room.top_left.0 + 1, room.bottom_right.0 - 1);
        let y = rng.range_inclusive(room.top_left.1 + 1, room.bottom_right.1 - 1);

        if map.entity_at(x, y).is_some() {
            continue; // Skip if occupied
        }

        let kind = MonsterKind::roll(rng);
        let id = spawner.spawn(map, x, y, kind);
        trace!("spawned {kind} {id:?} at ({x}, {y})");
        spawned += 1;
    }

    spawned
}
