//! Distance to screen slice projection
//!
//! Each ray hit becomes one vertical line in the side view. Its height is the
//! inverse of the perpendicular distance scaled by a per-layer constant, so
//! walls and the cheese can be sized independently.

use serde::{Deserialize, Serialize};

use crate::Vector2;
use crate::consts::*;
use crate::sim::{Fan, Layer, RayHit};

/// Placement of the pseudo-3D view on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left corner of the outlined frame
    pub frame_origin: Vector2,
    /// Size of the outlined frame
    pub frame_size: Vector2,
    /// Left edge / vertical centre of the slice area
    pub root: Vector2,
    /// Horizontal extent shared by all slices
    pub width: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            frame_origin: Vector2::new(315.0, 55.0),
            frame_size: Vector2::new(312.0, 250.0),
            root: Vector2::new(320.0, 180.0),
            width: 300.0,
        }
    }
}

impl Viewport {
    /// Tallest slice that fits the frame
    #[inline]
    pub fn height(&self) -> f64 {
        self.frame_size.y
    }

    /// Screen x of a beam's slice column
    #[inline]
    pub fn column_x(&self, beam_index: u32, beam_total: u32) -> f64 {
        self.root.x + (self.width / beam_total as f64) * beam_index as f64
    }
}

/// A projected vertical line in the side view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub layer: Layer,
    pub begin: Vector2,
    pub end: Vector2,
    /// Projected height before the grid collapses it to a tick
    pub height: f64,
    pub distance: f64,
    pub perp_distance: f64,
    /// Brightness, 255 at the eye falling to 0 at beam length; unclamped
    pub shade: f64,
}

/// Projection constant for a layer
pub fn layer_scale(layer: Layer) -> f64 {
    match layer {
        Layer::Wall | Layer::Grid => WALL_SCALE,
        Layer::Cheese => CHEESE_SCALE,
    }
}

/// Distance measured along the view direction, removing fish-eye bulge
#[inline]
pub fn perpendicular_distance(distance: f64, angle: f64, heading: f64) -> f64 {
    distance * (angle - heading).cos()
}

/// Inverse-distance slice height, clamped to `[0, max_height]`
#[inline]
pub fn line_height(scale: f64, perp_distance: f64, max_height: f64) -> f64 {
    (scale / perp_distance).clamp(0.0, max_height)
}

/// Slice brightness for a hit `distance` away on a beam of `beam_length`
#[inline]
pub fn shade(distance: f64, beam_length: f64) -> f64 {
    MAX_SHADE - (MAX_SHADE / beam_length) * distance
}

/// Project one hit into the side view
///
/// Walls and cheese are centred on the view's horizon. Grid hits compute the
/// wall height but draw a zero-length tick at the bottom of where that wall
/// slice would end, which shows the grid as a floor pattern of dots.
pub fn project(hit: &RayHit, fan: &Fan, viewport: &Viewport) -> Slice {
    let distance = hit.distance();
    let perp_distance = perpendicular_distance(distance, hit.angle, fan.heading);
    let height = line_height(layer_scale(hit.layer), perp_distance, viewport.height());
    let x = viewport.column_x(hit.beam_index, fan.beam_total);

    let (begin, end) = match hit.layer {
        Layer::Wall | Layer::Cheese => {
            let begin = Vector2::new(x, viewport.root.y - height / 2.0);
            (begin, begin + Vector2::new(0.0, height))
        }
        Layer::Grid => {
            let begin = Vector2::new(x, viewport.root.y + height / 2.0);
            (begin, begin)
        }
    };

    Slice {
        layer: hit.layer,
        begin,
        end,
        height,
        distance,
        perp_distance,
        shade: shade(distance, fan.beam_length),
    }
}
