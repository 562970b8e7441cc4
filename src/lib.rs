//! Maze Caster - a 2D field with a pseudo-3D raycast side view
//!
//! Core modules:
//! - `sim`: Deterministic simulation (segments, scene, ray fan, entity update)
//! - `renderer`: Projection of ray hits into slices and draw command generation
//! - `settings`: Validated, serializable ray fan configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// 2D vector used throughout the simulation
///
/// `+`, `-`, `* s` and `length()` cover add/sub/scale/magnitude; the type is
/// `Copy`, so every operation yields a fresh value.
pub type Vector2 = DVec2;

/// Game configuration constants
pub mod consts {
    use std::f64::consts::PI;

    /// Field rectangle (x range, y range)
    pub const FIELD_RANGE_X: [f64; 2] = [50.0, 250.0];
    pub const FIELD_RANGE_Y: [f64; 2] = [50.0, 300.0];
    /// Grid cell size inside the field
    pub const GRID_SPACING: f64 = 50.0;

    /// Player spawn pose
    pub const PLAYER_START: (f64, f64) = (100.0, 200.0);
    pub const START_ANGLE: f64 = -PI / 2.0;

    /// Rotation per frame for player turning and bait spin
    pub const TURN_RATE: f64 = PI / 120.0;
    /// Player translation per frame
    pub const MOVE_SPEED: f64 = 2.0;
    /// Distance from a field edge at which forward/backward motion stops
    pub const EDGE_MARGIN: f64 = 3.0;

    /// Player-to-bait distance that counts as a catch
    pub const CATCH_RADIUS: f64 = 10.0;
    /// Keep respawned bait this far inside the field
    pub const RESPAWN_MARGIN: f64 = 15.0;

    /// Cheese glyph radii around the bait centre
    pub const CHEESE_INNER_RADIUS: f64 = 5.0;
    pub const CHEESE_OUTER_RADIUS: f64 = 10.0;

    /// Ray fan defaults
    pub const DEFAULT_FOV: f64 = PI / 2.0;
    pub const DEFAULT_BEAM_TOTAL: u32 = 80;
    pub const DEFAULT_BEAM_LENGTH: f64 = 100.0;

    /// Projection constant for walls and grid lines
    pub const WALL_SCALE: f64 = 2800.0;
    /// Projection constant for the cheese
    pub const CHEESE_SCALE: f64 = 400.0;
    /// Brightest slice shade
    pub const MAX_SHADE: f64 = 255.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> Vector2 {
    Vector2::new(r * theta.cos(), r * theta.sin())
}
