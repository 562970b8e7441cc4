//! Ray fan sweep
//!
//! A fan of `beam_total` beams is spread evenly across the field of view,
//! starting at the left edge (`heading - fov/2`). Each beam is tested against
//! walls, grid and cheese in that order and every hit is reported; there is
//! no nearest-hit occlusion, later slices simply overdraw earlier ones.

use serde::{Deserialize, Serialize};

use super::scene::{Layer, Scene};
use super::segment::Segment;
use super::state::Player;
use crate::consts::*;
use crate::{Settings, Vector2, polar_to_cartesian};

/// Field of view cast from a single point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fan {
    pub origin: Vector2,
    /// Center angle of the view (radians)
    pub heading: f64,
    /// Angular width of the view (radians)
    pub fov: f64,
    pub beam_total: u32,
    pub beam_length: f64,
}

impl Fan {
    pub fn new(origin: Vector2, heading: f64, fov: f64, beam_total: u32, beam_length: f64) -> Self {
        debug_assert!(fov > 0.0, "fov must be positive");
        debug_assert!(beam_total > 0, "fan needs at least one beam");
        debug_assert!(beam_length > 0.0, "beam length must be positive");
        Self {
            origin,
            heading,
            fov,
            beam_total,
            beam_length,
        }
    }

    /// Fan with the default 90° view and 80 beams of length 100
    pub fn with_defaults(origin: Vector2, heading: f64) -> Self {
        Self::new(origin, heading, DEFAULT_FOV, DEFAULT_BEAM_TOTAL, DEFAULT_BEAM_LENGTH)
    }

    /// Fan looking out of the player's eyes
    pub fn from_player(player: &Player, settings: &Settings) -> Self {
        Self::new(
            player.position,
            player.angle,
            settings.fov,
            settings.beam_total,
            settings.beam_length,
        )
    }

    /// Angle of the leftmost beam
    #[inline]
    pub fn left_angle(&self) -> f64 {
        self.heading - self.fov / 2.0
    }

    /// Angular step between neighbouring beams
    #[inline]
    pub fn step(&self) -> f64 {
        self.fov / self.beam_total as f64
    }

    /// Lazily generate the beams, left to right
    pub fn beams(self) -> impl Iterator<Item = Beam> {
        (0..self.beam_total).map(move |index| {
            let angle = self.left_angle() + index as f64 * self.step();
            Beam {
                index,
                angle,
                segment: Segment::new(self.origin, polar_to_cartesian(self.beam_length, angle)),
            }
        })
    }
}

/// One ray of the fan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub index: u32,
    pub angle: f64,
    pub segment: Segment,
}

/// A beam crossing a scene segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    pub beam_index: u32,
    pub angle: f64,
    pub beam: Segment,
    pub point: Vector2,
    pub layer: Layer,
}

impl RayHit {
    /// Straight-line distance from the beam origin to the hit
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.point - self.beam.begin()).length()
    }
}

/// Hits of a single beam: walls, then grid, then cheese
pub fn beam_hits(scene: &Scene, beam: Beam) -> impl Iterator<Item = RayHit> + '_ {
    Layer::ALL.into_iter().flat_map(move |layer| {
        scene.layer(layer).iter().filter_map(move |target| {
            beam.segment.intersect(target).map(|point| RayHit {
                beam_index: beam.index,
                angle: beam.angle,
                beam: beam.segment,
                point,
                layer,
            })
        })
    })
}

/// Every hit of every beam against the scene, lazily
///
/// Beams are visited left to right; see [`beam_hits`] for the order within
/// a beam.
pub fn cast(scene: &Scene, fan: Fan) -> impl Iterator<Item = RayHit> + '_ {
    fan.beams().flat_map(move |beam| beam_hits(scene, beam))
}
