//! Scene geometry: field walls, grid lines and the cheese glyph
//!
//! Walls and grid come from fixed coordinates; the cheese follows the bait's
//! current pose, so the whole scene is rebuilt each frame.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::segment::Segment;
use super::state::Bait;
use crate::consts::*;
use crate::{Vector2, polar_to_cartesian};

/// Which geometry collection a segment or hit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    Wall,
    Grid,
    Cheese,
}

impl Layer {
    /// Collections in the order beams are tested against them
    pub const ALL: [Layer; 3] = [Layer::Wall, Layer::Grid, Layer::Cheese];
}

/// All segments a beam can hit in one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub walls: [Segment; 4],
    pub grid: [Segment; 7],
    pub cheese: [Segment; 3],
}

impl Scene {
    /// Build the scene for the bait's current pose
    pub fn build(bait: &Bait) -> Self {
        Self {
            walls: walls(),
            grid: grid(),
            cheese: cheese(bait),
        }
    }

    /// Segments of one collection
    pub fn layer(&self, layer: Layer) -> &[Segment] {
        match layer {
            Layer::Wall => &self.walls,
            Layer::Grid => &self.grid,
            Layer::Cheese => &self.cheese,
        }
    }
}

fn from_points(bx: f64, by: f64, ex: f64, ey: f64) -> Segment {
    Segment::from_endpoints(Vector2::new(bx, by), Vector2::new(ex, ey))
}

/// The four field boundary walls
pub fn walls() -> [Segment; 4] {
    let [x0, x1] = FIELD_RANGE_X;
    let [y0, y1] = FIELD_RANGE_Y;
    [
        from_points(x0, y0, x0, y1),
        from_points(x0, y0, x1, y0),
        from_points(x0, y1, x1, y1),
        from_points(x1, y0, x1, y1),
    ]
}

/// Interior grid lines: 4 horizontal, then 3 vertical
pub fn grid() -> [Segment; 7] {
    let [x0, x1] = FIELD_RANGE_X;
    let [y0, y1] = FIELD_RANGE_Y;
    let row = |i: f64| {
        let y = y0 + GRID_SPACING * i;
        from_points(x0, y, x1, y)
    };
    let col = |i: f64| {
        let x = x0 + GRID_SPACING * i;
        from_points(x, y0, x, y1)
    };
    [row(1.0), row(2.0), row(3.0), row(4.0), col(1.0), col(2.0), col(3.0)]
}

/// Triangular cheese glyph spinning around the bait
pub fn cheese(bait: &Bait) -> [Segment; 3] {
    let vertex = |radius: f64, theta: f64| bait.position + polar_to_cartesian(radius, theta + bait.angle);

    let left = vertex(CHEESE_INNER_RADIUS, PI / 4.0);
    let right = vertex(CHEESE_INNER_RADIUS, PI * 3.0 / 4.0);
    let tip = vertex(CHEESE_OUTER_RADIUS, PI * 3.0 / 2.0);

    [
        Segment::from_endpoints(left, tip),
        Segment::from_endpoints(right, tip),
        Segment::from_endpoints(left, right),
    ]
}
