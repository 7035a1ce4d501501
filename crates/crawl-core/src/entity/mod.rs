//! Entity system
//!
//! Contains entity instances, their handles, and the monster factory.

#[allow(clippy::module_inception)]
mod entity;
mod factories;

pub use entity::{Color, Entity, EntityId};
pub use factories::{EntitySpawner, MonsterFactory, MonsterKind};
