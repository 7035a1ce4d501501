//! Tunnel generation
//!
//! Rooms are linked by L-shaped tunnels: a straight run along one axis to a
//! corner, then a straight run along the other axis to the target.

use crate::rng::GameRng;
use crate::HORIZONTAL_FIRST_CHANCE;

/// Grid coordinate
pub type Point = (i32, i32);

/// Produces the points on a straight line between two grid points
pub trait PathTracer {
    /// Ordered points from `from` to `to`, both endpoints included
    fn trace(&self, from: Point, to: Point) -> Vec<Point>;
}

/// Integer Bresenham line tracer
#[derive(Debug, Clone, Copy, Default)]
pub struct Bresenham;

impl PathTracer for Bresenham {
    fn trace(&self, from: Point, to: Point) -> Vec<Point> {
        let (mut x, mut y) = from;
        let (x1, y1) = to;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut points = Vec::with_capacity((dx - dy) as usize + 1);
        loop {
            points.push((x, y));
            if x == x1 && y == y1 {
                return points;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Which leg of the L a tunnel digs first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Turn at `(end.x, start.y)`
    HorizontalFirst,
    /// Turn at `(start.x, end.y)`
    VerticalFirst,
}

impl Corner {
    /// Even odds of either orientation
    pub fn roll(rng: &mut GameRng) -> Self {
        if rng.chance(HORIZONTAL_FIRST_CHANCE) {
            Corner::HorizontalFirst
        } else {
            Corner::VerticalFirst
        }
    }

    pub fn point(self, start: Point, end: Point) -> Point {
        match self {
            Corner::HorizontalFirst => (end.0, start.1),
            Corner::VerticalFirst => (start.0, end.1),
        }
    }
}

/// Points of the L-shaped path through the given corner.
///
/// The corner appears twice, once as the end of the first leg and once as
/// the start of the second.
pub fn l_path(start: Point, end: Point, corner: Corner, tracer: &dyn PathTracer) -> Vec<Point> {
    let turn = corner.point(start, end);
    let mut points = tracer.trace(start, turn);
    points.extend(tracer.trace(turn, end));
    points
}

/// Return an L-shaped tunnel between these two points with a random corner
pub fn tunnel_between(
    start: Point,
    end: Point,
    rng: &mut GameRng,
    tracer: &dyn PathTracer,
) -> Vec<Point> {
    l_path(start, end, Corner::roll(rng), tracer)
}
