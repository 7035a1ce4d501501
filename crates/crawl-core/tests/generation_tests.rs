use std::collections::HashSet;

use proptest::prelude::*;

use crawl_core::dungeon::{
    l_path, Bresenham, Corner, DungeonGenerator, GameMap, Layout, PathTracer, Point, TileKind,
    PLAYER_ID,
};
use crawl_core::entity::Entity;
use crawl_core::{DungeonConfig, GameRng};

fn config(max_rooms: u32, min: i32, max: i32, w: i32, h: i32, monsters: u32) -> DungeonConfig {
    DungeonConfig {
        max_rooms,
        room_min_size: min,
        room_max_size: max,
        map_width: w,
        map_height: h,
        max_monsters_per_room: monsters,
    }
}

fn layout(cfg: DungeonConfig, seed: u64) -> Layout {
    DungeonGenerator::new(cfg)
        .unwrap()
        .generate_layout(Entity::player(), &mut GameRng::new(seed))
}

/// Traces nothing; generation with it carves rooms only
struct NoTracer;

impl PathTracer for NoTracer {
    fn trace(&self, _from: Point, _to: Point) -> Vec<Point> {
        Vec::new()
    }
}

fn floor_tiles(map: &GameMap) -> HashSet<Point> {
    let mut floor = HashSet::new();
    for x in 0..map.width() {
        for y in 0..map.height() {
            if map.tile(x, y) == Some(TileKind::Floor) {
                floor.insert((x, y));
            }
        }
    }
    floor
}

#[test]
fn test_single_room_scenario() {
    let layout = layout(config(1, 4, 4, 20, 20, 0), 42);

    assert_eq!(layout.rooms.len(), 1);
    let room = layout.rooms[0];
    let player = layout.map.entity(PLAYER_ID).unwrap();
    assert_eq!(player.position(), room.center());

    assert_eq!(layout.map.entities().len(), 1);
    assert_eq!(layout.map.monsters().count(), 0);

    // Only the 3x3 interior is floor: no tunnels
    assert_eq!(layout.map.count_tiles(TileKind::Floor), 9);
}

#[test]
fn test_forced_overlap_scenario() {
    // A 5x5 room in a 6x6 map can only go at (0, 0)
    for seed in 0..20 {
        let layout = layout(config(5, 5, 5, 6, 6, 1), seed);
        assert_eq!(layout.rooms.len(), 1, "seed {}", seed);
        assert_eq!(layout.rooms[0].top_left, (0, 0));
        assert_eq!(layout.rooms[0].bottom_right, (5, 5));
    }
}

#[test]
fn test_fixed_seed_reproduces_level() {
    let cfg = config(10, 6, 10, 80, 45, 2);
    let a = layout(cfg, 0xC0FFEE);
    let b = layout(cfg, 0xC0FFEE);

    assert_eq!(a.rooms, b.rooms);
    assert_eq!(a.map, b.map);
    assert_eq!(
        a.map.to_ascii(),
        b.map.to_ascii(),
        "tunnel layout and roster should match"
    );
}

#[test]
fn test_different_seeds_differ() {
    let cfg = config(10, 6, 10, 80, 45, 2);
    let a = layout(cfg, 1);
    let b = layout(cfg, 2);
    assert_ne!(a.rooms, b.rooms);
}

#[test]
fn test_rooms_are_connected_by_floor() {
    let layout = layout(config(20, 5, 9, 70, 40, 0), 9);
    let floor = floor_tiles(&layout.map);
    let start = layout.rooms[0].center();

    // Flood fill over 4-connected floor
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some((x, y)) = stack.pop() {
        for next in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if floor.contains(&next) && seen.insert(next) {
                stack.push(next);
            }
        }
    }

    assert_eq!(seen.len(), floor.len(), "every floor tile should be reachable");
    for room in &layout.rooms {
        assert!(seen.contains(&room.center()));
    }
}

#[test]
fn test_json_round_trip_of_map() {
    let layout = layout(config(8, 4, 7, 40, 30, 2), 31);
    let json = serde_json::to_string(&layout.map).unwrap();
    let restored: GameMap = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, layout.map);
}

fn arb_config() -> impl Strategy<Value = DungeonConfig> {
    (1u32..25, 2i32..6, 0i32..5, 1i32..50, 1i32..30, 0u32..4).prop_map(
        |(max_rooms, min, extra, w_extra, h_extra, monsters)| {
            let max = min + extra;
            config(max_rooms, min, max, max + w_extra, max + h_extra, monsters)
        },
    )
}

proptest! {
    #[test]
    fn accepted_rooms_never_intersect(cfg in arb_config(), seed in any::<u64>()) {
        let layout = layout(cfg, seed);
        prop_assert!(!layout.rooms.is_empty());
        prop_assert!(layout.rooms.len() <= cfg.max_rooms as usize);
        for (i, a) in layout.rooms.iter().enumerate() {
            for b in &layout.rooms[i + 1..] {
                prop_assert!(!a.intersects(b));
                prop_assert!(!b.intersects(a));
            }
        }
    }

    #[test]
    fn rooms_are_carved_and_walled(cfg in arb_config(), seed in any::<u64>()) {
        let full = layout(cfg, seed);
        // Tunnels consume the same random draws with any tracer
        let bare = DungeonGenerator::new(cfg)
            .unwrap()
            .with_tracer(NoTracer)
            .generate_layout(Entity::player(), &mut GameRng::new(seed));
        prop_assert_eq!(&full.rooms, &bare.rooms);
        prop_assert_eq!(full.map.entities(), bare.map.entities());

        for room in &bare.rooms {
            let (xs, ys) = room.inner_region();
            for x in xs.clone() {
                for y in ys.clone() {
                    prop_assert_eq!(full.map.tile(x, y), Some(TileKind::Floor));
                }
            }
            let (x0, y0) = room.top_left;
            let (x1, y1) = room.bottom_right;
            for x in x0..=x1 {
                for y in [y0, y1] {
                    prop_assert_eq!(bare.map.tile(x, y), Some(TileKind::Wall));
                }
            }
            for y in y0..=y1 {
                for x in [x0, x1] {
                    prop_assert_eq!(bare.map.tile(x, y), Some(TileKind::Wall));
                }
            }
        }

        // Tunnels only ever add floor
        let bare_floor = floor_tiles(&bare.map);
        let full_floor = floor_tiles(&full.map);
        prop_assert!(bare_floor.is_subset(&full_floor));
    }

    #[test]
    fn monsters_stay_in_rooms_without_stacking(cfg in arb_config(), seed in any::<u64>()) {
        let layout = layout(cfg, seed);
        let entities = layout.map.entities();

        prop_assert!(entities[0].kind.is_none());
        prop_assert!(entities[1..].iter().all(|e| e.is_monster()));

        let positions: HashSet<Point> = entities.iter().map(|e| e.position()).collect();
        prop_assert_eq!(positions.len(), entities.len());

        for room in &layout.rooms {
            let in_room = entities[1..]
                .iter()
                .filter(|e| room.contains_inner(e.x, e.y))
                .count();
            prop_assert!(in_room <= cfg.max_monsters_per_room as usize);
        }
        for monster in &entities[1..] {
            prop_assert!(layout.rooms.iter().any(|r| r.contains_inner(monster.x, monster.y)));
        }
    }

    #[test]
    fn l_path_is_four_connected(
        sx in -20i32..20, sy in -20i32..20,
        ex in -20i32..20, ey in -20i32..20,
        horizontal in any::<bool>(),
    ) {
        let corner = if horizontal { Corner::HorizontalFirst } else { Corner::VerticalFirst };
        let path = l_path((sx, sy), (ex, ey), corner, &Bresenham);

        prop_assert_eq!(path.first(), Some(&(sx, sy)));
        prop_assert_eq!(path.last(), Some(&(ex, ey)));
        for w in path.windows(2) {
            prop_assert!((w[0].0 - w[1].0).abs() + (w[0].1 - w[1].1).abs() <= 1);
        }
        prop_assert_eq!(path, l_path((sx, sy), (ex, ey), corner, &Bresenham));
    }
}
