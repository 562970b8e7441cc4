//! Game state and core simulation types
//!
//! Everything the host must keep between frames lives in [`GameState`].

use serde::{Deserialize, Serialize};

use super::tick::{RandomSource, respawn_offset};
use crate::Vector2;
use crate::consts::*;

/// The player, seen from above as a dot with a heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vector2,
    /// Heading (radians, unbounded; trig wraps it)
    pub angle: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vector2::new(PLAYER_START.0, PLAYER_START.1),
            angle: START_ANGLE,
        }
    }
}

impl Player {
    /// Unit vector along the heading
    #[inline]
    pub fn facing(&self) -> Vector2 {
        Vector2::new(self.angle.cos(), self.angle.sin())
    }
}

/// The collectible; spins in place and jumps when caught
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bait {
    pub position: Vector2,
    /// Spin angle of the cheese glyph (radians)
    pub angle: f64,
}

impl Default for Bait {
    fn default() -> Self {
        Self {
            position: Vector2::ZERO,
            angle: START_ANGLE,
        }
    }
}

impl Bait {
    /// Spawn a bait somewhere inside the field
    ///
    /// Uses the respawn formula relative to the origin, so the first spawn
    /// lands in the same area as later ones.
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut bait = Self::default();
        bait.position = bait.position + respawn_offset(bait.position, rng);
        bait
    }
}

/// Complete per-run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub bait: Bait,
    /// Baits caught so far
    pub score: u32,
    /// Frames simulated
    pub frame: u64,
}

impl GameState {
    /// Fresh run: player at its start pose, bait placed at random
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            player: Player::default(),
            bait: Bait::spawn(rng),
            score: 0,
            frame: 0,
        }
    }

    /// Distance between player and bait centres
    pub fn bait_distance(&self) -> f64 {
        (self.bait.position - self.player.position).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state() {
        let mut rng = Pcg32::seed_from_u64(7);
        let state = GameState::new(&mut rng);
        assert_eq!(state.player.position, Vector2::new(100.0, 200.0));
        assert_eq!(state.player.angle, -std::f64::consts::FRAC_PI_2);
        assert_eq!(state.bait.angle, -std::f64::consts::FRAC_PI_2);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_initial_bait_inside_field() {
        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let bait = Bait::spawn(&mut rng);
            assert!((65.0..=235.0).contains(&bait.position.x), "x = {}", bait.position.x);
            assert!((65.0..=285.0).contains(&bait.position.y), "y = {}", bait.position.y);
            assert_eq!(bait.position.x.fract(), 0.0);
            assert_eq!(bait.position.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_player_facing() {
        let player = Player {
            position: Vector2::ZERO,
            angle: 0.0,
        };
        assert_eq!(player.facing(), Vector2::new(1.0, 0.0));
    }
}
