//! Rectangular rooms
//!
//! A room is stored by its outer corners. The outer ring of tiles is wall;
//! only the inner region is ever carved to floor.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Rectangle representing a room, walls included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Top-left corner (wall)
    pub top_left: (i32, i32),
    /// `top_left + (width, height)`
    pub bottom_right: (i32, i32),
}

impl Room {
    /// Create a room whose top-left corner is `(x, y)`
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "room must not be degenerate");
        Self {
            top_left: (x, y),
            bottom_right: (x + width, y + height),
        }
    }

    pub fn width(&self) -> i32 {
        self.bottom_right.0 - self.top_left.0
    }

    pub fn height(&self) -> i32 {
        self.bottom_right.1 - self.top_left.1
    }

    /// Get center point of the outer rectangle, truncated
    pub fn center(&self) -> (i32, i32) {
        (
            (self.top_left.0 + self.bottom_right.0) / 2,
            (self.top_left.1 + self.bottom_right.1) / 2,
        )
    }

    /// Tiles strictly inside the walls, as half-open `(xs, ys)` ranges
    pub fn inner_region(&self) -> (Range<i32>, Range<i32>) {
        (
            self.top_left.0 + 1..self.bottom_right.0,
            self.top_left.1 + 1..self.bottom_right.1,
        )
    }

    /// Check if point lies in the inner region
    pub fn contains_inner(&self, x: i32, y: i32) -> bool {
        let (xs, ys) = self.inner_region();
        xs.contains(&x) && ys.contains(&y)
    }

    /// Check if this room overlaps with another.
    ///
    /// Closed-interval test on the outer corners: rooms that only share a
    /// border row or column count as intersecting, so accepted rooms never
    /// touch wall-to-wall.
    pub fn intersects(&self, other: &Room) -> bool {
        self.top_left.0 <= other.bottom_right.0
            && self.bottom_right.0 >= other.top_left.0
            && self.top_left.1 <= other.bottom_right.1
            && self.bottom_right.1 >= other.top_left.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_overlap() {
        let room1 = Room::new(5, 5, 5, 5);
        let room2 = Room::new(8, 8, 5, 5);
        let room3 = Room::new(15, 15, 5, 5);

        assert!(room1.intersects(&room2));
        assert!(room2.intersects(&room1));
        assert!(!room1.intersects(&room3));
    }

    #[test]
    fn test_shared_edge_intersects() {
        // room1 spans x 0..=4, room2 starts at x 4
        let room1 = Room::new(0, 0, 4, 4);
        let room2 = Room::new(4, 0, 4, 4);
        assert!(room1.intersects(&room2));

        // One column of gap
        let room3 = Room::new(5, 0, 4, 4);
        assert!(!room1.intersects(&room3));
    }

    #[test]
    fn test_shared_corner_intersects() {
        let room1 = Room::new(0, 0, 3, 3);
        let room2 = Room::new(3, 3, 3, 3);
        assert!(room1.intersects(&room2));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Room::new(0, 0, 10, 10);
        let inner = Room::new(2, 2, 3, 3);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_center_truncates() {
        assert_eq!(Room::new(0, 0, 4, 4).center(), (2, 2));
        assert_eq!(Room::new(1, 2, 4, 5).center(), (3, 4));
        assert_eq!(Room::new(3, 3, 5, 5).center(), (5, 5));
    }

    #[test]
    fn test_inner_region() {
        let room = Room::new(2, 3, 4, 5);
        assert_eq!(room.bottom_right, (6, 8));
        assert_eq!(room.inner_region(), (3..6, 4..8));
        assert!(room.contains_inner(3, 4));
        assert!(room.contains_inner(5, 7));
        assert!(!room.contains_inner(2, 4));
        assert!(!room.contains_inner(6, 7));
        assert_eq!((room.width(), room.height()), (4, 5));
    }

    #[test]
    fn test_smallest_room_has_one_inner_tile() {
        let room = Room::new(0, 0, 2, 2);
        let (xs, ys) = room.inner_region();
        assert_eq!(xs.len() * ys.len(), 1);
        assert!(room.contains_inner(1, 1));
    }
}
