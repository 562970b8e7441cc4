//! Deterministic simulation module
//!
//! All geometry and gameplay logic lives here. This module must be pure:
//! - One fixed step per frame
//! - Randomness only through an injected `RandomSource`
//! - No rendering or platform dependencies

pub mod raycast;
pub mod scene;
pub mod segment;
pub mod state;
pub mod tick;

pub use raycast::{Beam, Fan, RayHit, beam_hits, cast};
pub use scene::{Layer, Scene};
pub use segment::{Segment, effective_direction, intersect};
pub use state::{Bait, GameState, Player};
pub use tick::{RandomSource, TickInput, random_between, respawn_offset, tick};
