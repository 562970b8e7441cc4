//! Per-frame simulation step
//!
//! One call to [`tick`] advances the game by exactly one frame:
//! bait catch/respawn, bait spin, player turn, player move.

use rand::{Rng, RngCore};

use super::state::GameState;
use crate::Vector2;
use crate::consts::*;

/// Input commands for a single frame (keys held down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Turn counter-clockwise on screen
    pub left: bool,
    /// Turn clockwise on screen
    pub right: bool,
    /// Step along the heading
    pub forward: bool,
    /// Step against the heading
    pub backward: bool,
}

/// Source of uniform samples for bait placement
///
/// Every `rand` generator is a `RandomSource`; tests can plug in a scripted
/// sequence instead.
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Integer-valued sample in (min, max]
///
/// `floor(u * (max - min) + 1) + min`; with integral bounds this yields an
/// integer in `[min + 1, max]`.
pub fn random_between<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    (rng.unit() * (max - min) + 1.0).floor() + min
}

/// Displacement that moves bait at `position` to a random spot inside the
/// field, `RESPAWN_MARGIN` away from every edge
///
/// The bounds are taken relative to the current position and the result is
/// meant to be added to it.
pub fn respawn_offset<R: RandomSource + ?Sized>(position: Vector2, rng: &mut R) -> Vector2 {
    let [x0, x1] = FIELD_RANGE_X;
    let [y0, y1] = FIELD_RANGE_Y;
    let x = random_between(rng, x0 + RESPAWN_MARGIN - position.x, x1 - RESPAWN_MARGIN - position.x);
    let y = random_between(rng, y0 + RESPAWN_MARGIN - position.y, y1 - RESPAWN_MARGIN - position.y);
    Vector2::new(x, y)
}

/// Whether a step along `dir` from `pos` is allowed
///
/// Each axis passes only if the player is inside the margin on the side it
/// is heading toward. An axis component of exactly zero never passes.
fn can_step(pos: Vector2, dir: Vector2) -> bool {
    let [x0, x1] = FIELD_RANGE_X;
    let [y0, y1] = FIELD_RANGE_Y;
    let x_ok = (x0 + EDGE_MARGIN <= pos.x && dir.x < 0.0) || (pos.x <= x1 - EDGE_MARGIN && dir.x > 0.0);
    let y_ok = (y0 + EDGE_MARGIN <= pos.y && dir.y < 0.0) || (pos.y <= y1 - EDGE_MARGIN && dir.y > 0.0);
    x_ok && y_ok
}

/// Catch the bait if the player is close enough
fn check_catch<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.bait_distance() >= CATCH_RADIUS {
        return;
    }

    state.score += 1;
    log::info!("Bait caught, score {}", state.score);

    let offset = respawn_offset(state.bait.position, rng);
    state.bait.position = state.bait.position + offset;
    log::debug!(
        "Bait moved by ({}, {}) to ({}, {})",
        offset.x,
        offset.y,
        state.bait.position.x,
        state.bait.position.y
    );
}

/// Advance the game state by one frame
pub fn tick<R: RandomSource + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    check_catch(state, rng);

    state.bait.angle += TURN_RATE;

    let player = &mut state.player;
    if input.left {
        player.angle -= TURN_RATE;
    }
    if input.right {
        player.angle += TURN_RATE;
    }

    if input.forward {
        let dir = player.facing();
        if can_step(player.position, dir) {
            player.position = player.position + dir * MOVE_SPEED;
        }
    }
    if input.backward {
        let dir = -player.facing();
        if can_step(player.position, dir) {
            player.position = player.position + dir * MOVE_SPEED;
        }
    }

    state.frame += 1;
}
