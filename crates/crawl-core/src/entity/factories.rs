//! Monster prototypes and the spawner seam used by the generator

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Entity, EntityId};
use crate::dungeon::GameMap;
use crate::rng::GameRng;
use crate::WEAK_MONSTER_CHANCE;

/// The two monster kinds the generator places
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MonsterKind {
    /// Common, weaker monster
    Orc,
    /// Rare, stronger monster
    Troll,
}

impl MonsterKind {
    /// Weaker kind with probability 0.8, otherwise the stronger one
    pub fn roll(rng: &mut GameRng) -> Self {
        if rng.chance(WEAK_MONSTER_CHANCE) {
            MonsterKind::Orc
        } else {
            MonsterKind::Troll
        }
    }

    /// Template entity every spawn of this kind is copied from
    pub fn prototype(self) -> Entity {
        let mut entity = match self {
            MonsterKind::Orc => Entity::new('o', (63, 127, 63), "Orc", true),
            MonsterKind::Troll => Entity::new('T', (0, 127, 0), "Troll", true),
        };
        entity.kind = Some(self);
        entity
    }
}

/// Creates monsters and registers them with a map
pub trait EntitySpawner {
    fn spawn(&self, map: &mut GameMap, x: i32, y: i32, kind: MonsterKind) -> EntityId;
}

/// Spawns copies of each kind's prototype
#[derive(Debug, Clone, Copy, Default)]
pub struct MonsterFactory;

impl EntitySpawner for MonsterFactory {
    fn spawn(&self, map: &mut GameMap, x: i32, y: i32, kind: MonsterKind) -> EntityId {
        map.add_entity(kind.prototype().positioned(x, y))
    }
}
