//! Autopilot runs over the real game logic.
//!
//! Statistics are accumulated from `TickResult`s, never by peeking at
//! simulator-only state.

use super::config::SimConfig;
use super::report::SimReport;
use crate::game::{process_input, tick_game, GameInput, GamePhase, GameWorld, TickResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Jumps over the nearest cactus once it is within `look_ahead` px.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub look_ahead: i32,
}

impl Autopilot {
    pub fn new(look_ahead: i32) -> Self {
        Self { look_ahead }
    }

    /// Input to send before the next frame, if any.
    pub fn decide(&self, world: &GameWorld) -> Option<GameInput> {
        match world.phase {
            GamePhase::Start => Some(GameInput::JumpPressed),
            GamePhase::GameOver => None,
            GamePhase::Play => {
                let runner = &world.runner.rect;
                let gap = world
                    .obstacles
                    .iter()
                    .filter(|o| o.rect.right() >= runner.left())
                    .map(|o| o.rect.left() - runner.right())
                    .min()?;
                (world.runner.on_ground && (0..=self.look_ahead).contains(&gap))
                    .then_some(GameInput::JumpPressed)
            }
        }
    }
}

/// Outcome of one autopilot run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub frames_survived: u64,
    pub final_score: u32,
    pub obstacles_spawned: u64,
    pub obstacles_cleared: u64,
    pub clouds_spawned: u64,
    pub jumps: u64,
    pub checkpoints: u64,
    /// Cactus that ended the run, `None` if it hit the frame cap.
    pub crashed_into: Option<String>,
}

impl RunStats {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            frames_survived: 0,
            final_score: 0,
            obstacles_spawned: 0,
            obstacles_cleared: 0,
            clouds_spawned: 0,
            jumps: 0,
            checkpoints: 0,
            crashed_into: None,
        }
    }

    fn process_tick(&mut self, result: &TickResult) {
        if result.spawned.is_some() {
            self.obstacles_spawned += 1;
        }
        if result.cloud_spawned {
            self.clouds_spawned += 1;
        }
        self.obstacles_cleared += result.obstacles_cleared as u64;
        self.checkpoints += result.checkpoints.len() as u64;
        if let Some(kind) = result.crashed_into {
            self.crashed_into = Some(kind.name().to_string());
        }
    }

    pub fn crashed(&self) -> bool {
        self.crashed_into.is_some()
    }
}

/// Play one run until the runner crashes or `config.frames` frames pass.
/// `observer` sees every frame's result (used for verbose output).
pub fn simulate_run<F>(config: &SimConfig, seed: u64, mut observer: F) -> RunStats
where
    F: FnMut(u64, &TickResult),
{
    let mut world = GameWorld::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let autopilot = Autopilot::new(config.look_ahead);
    let mut stats = RunStats::new(seed);

    for frame in 0..config.frames {
        if let Some(input) = autopilot.decide(&world) {
            let was_playing = world.phase == GamePhase::Play;
            if process_input(&mut world, input).is_some() && was_playing {
                stats.jumps += 1;
            }
        }

        let result = tick_game(&mut world, config.dt_ms, &mut rng);
        stats.process_tick(&result);
        observer(frame, &result);

        if world.phase == GamePhase::GameOver {
            break;
        }
    }

    stats.frames_survived = world.frames;
    stats.final_score = world.displayed_score();
    stats
}

/// Run every configured seed and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let runs = (0..config.runs)
        .map(|i| simulate_run(config, config.seed + i as u64, |_, _| {}))
        .collect();
    SimReport::from_runs(config, runs)
}
