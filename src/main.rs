//! Maze Caster entry point
//!
//! Headless native driver: plays a scripted input loop through the
//! simulation and renderer, then reports the outcome.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use maze_caster::Settings;
use maze_caster::renderer::{DrawCommand, render};
use maze_caster::sim::{GameState, TickInput, tick};

/// Frames to simulate (ten seconds at 60 Hz)
const DEMO_FRAMES: u32 = 600;
/// Set to dump the final frame's draw list as JSON on stdout
const DUMP_ENV: &str = "MAZE_CASTER_DUMP_FRAME";

/// Game instance holding all state
struct Game {
    state: GameState,
    rng: Pcg32,
    settings: Settings,
}

impl Game {
    fn new(seed: u64, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&mut rng);
        Self { state, rng, settings }
    }

    /// Wander: walk forward, turning in alternating two-second arcs
    fn scripted_input(frame: u32) -> TickInput {
        let arc = (frame / 120) % 2 == 0;
        TickInput {
            forward: true,
            left: arc,
            right: !arc && frame % 3 == 0,
            backward: false,
        }
    }

    /// Simulate and render one frame
    fn frame(&mut self, frame: u32) -> Vec<DrawCommand> {
        let input = Self::scripted_input(frame);
        tick(&mut self.state, &input, &mut self.rng);
        render(&self.state, &self.settings)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Maze Caster (headless) starting...");

    let settings = Settings::load();
    let seed = 0x5eed_cafe;
    let mut game = Game::new(seed, settings);
    log::info!("Game initialized with seed: {}", seed);

    let mut last = Vec::new();
    for frame in 0..DEMO_FRAMES {
        last = game.frame(frame);
    }

    log::info!(
        "Finished {} frames: score {}, player at ({:.1}, {:.1}), {} draw commands in last frame",
        game.state.frame,
        game.state.score,
        game.state.player.position.x,
        game.state.player.position.y,
        last.len()
    );

    if std::env::var_os(DUMP_ENV).is_some() {
        match serde_json::to_string_pretty(&last) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize frame: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by a host page on the web; nothing to run here
}
