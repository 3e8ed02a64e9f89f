//! T-Rex Runner game logic: input handling, per-frame update, collisions.

use super::types::*;
use crate::core::constants::*;
use rand::Rng;

/// UI-agnostic input events. Quit never reaches the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    JumpPressed,  // Space or Up
    DuckPressed,  // Down held
    DuckReleased, // Down released
}

/// Everything that happened during one call to `tick_game`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Sounds to play, in the order they were raised.
    pub cues: Vec<SoundCue>,
    /// Obstacle that ended the run this frame.
    pub crashed_into: Option<ObstacleKind>,
    /// Obstacle spawned this frame.
    pub spawned: Option<ObstacleKind>,
    pub cloud_spawned: bool,
    /// Obstacles that scrolled off the left edge this frame.
    pub obstacles_cleared: usize,
    /// Checkpoint numbers (score / 100) newly reached this frame.
    pub checkpoints: Vec<u32>,
    /// The session high score went up this frame.
    pub new_high_score: bool,
}

/// Apply one input event to the game flow. Returns the sound to play, if any.
pub fn process_input(world: &mut GameWorld, input: GameInput) -> Option<SoundCue> {
    match (world.phase, input) {
        (GamePhase::Start, GameInput::JumpPressed) => {
            world.phase = GamePhase::Play;
            world.run_start_high_score = world.high_score;
            world.log.info("Run started");
            None
        }
        (GamePhase::Play, GameInput::JumpPressed) => {
            world.runner.jump().then_some(SoundCue::Jump)
        }
        (GamePhase::GameOver, GameInput::JumpPressed) => {
            world.reset();
            world.phase = GamePhase::Play;
            world.log.info("Restarted");
            None
        }
        (GamePhase::Play, GameInput::DuckPressed) => {
            world.runner.set_duck(true);
            None
        }
        (_, GameInput::DuckPressed) => None,
        // Releasing duck always stands up, whatever the phase
        (_, GameInput::DuckReleased) => {
            world.runner.set_duck(false);
            None
        }
    }
}

/// Advance the world by one frame of `dt_ms` milliseconds.
///
/// Clouds move in every phase; everything else only runs while playing.
/// Obstacles and clouds step once per call regardless of `dt_ms`.
pub fn tick_game<R: Rng>(world: &mut GameWorld, dt_ms: u64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();

    // 0. Clouds (spawning gated on play)
    world.cloud_timer_ms += dt_ms;
    let cloud_threshold = rng.gen_range(CLOUD_SPAWN_MIN_MS..=CLOUD_SPAWN_MAX_MS);
    if world.cloud_timer_ms > cloud_threshold && world.phase == GamePhase::Play {
        world.spawn_cloud(rng);
        world.cloud_timer_ms = 0;
        result.cloud_spawned = true;
    }
    for cloud in &mut world.clouds {
        cloud.update();
    }
    world.clouds.retain(|c| !c.is_off_screen());

    if world.phase != GamePhase::Play {
        return result;
    }

    world.frames += 1;

    // 1. Runner physics
    world.runner.update(dt_ms);

    // 2. Ground scroll
    world.ground_offset = (world.ground_offset + world.speed) % GROUND_TILE_WIDTH;

    // 3. Obstacle spawning (threshold redrawn every frame)
    world.spawn_timer_ms += dt_ms;
    let spawn_threshold = rng.gen_range(OBSTACLE_SPAWN_MIN_MS..=OBSTACLE_SPAWN_MAX_MS);
    if world.spawn_timer_ms > spawn_threshold {
        result.spawned = Some(world.spawn_obstacle(rng));
        world.spawn_timer_ms = 0;
    }

    // 4. Move obstacles, drop the ones past the left edge
    for obstacle in &mut world.obstacles {
        obstacle.update();
    }
    let before = world.obstacles.len();
    world.obstacles.retain(|o| !o.is_off_screen());
    result.obstacles_cleared = before - world.obstacles.len();

    // 5. Collision
    if let Some(kind) = check_collision(world) {
        world.phase = GamePhase::GameOver;
        result.crashed_into = Some(kind);
        result.cues.push(SoundCue::Hit);
    }

    // 6-7. Score and high score
    world.score += dt_ms as f64 * SCORE_PER_MS;
    let shown = world.displayed_score();
    if shown > world.high_score {
        world.high_score = shown;
        result.new_high_score = true;
    }

    // 8. One cue per 100-point boundary reached
    let checkpoint = shown / CHECKPOINT_INTERVAL;
    while world.last_checkpoint < checkpoint {
        world.last_checkpoint += 1;
        result.checkpoints.push(world.last_checkpoint);
        result.cues.push(SoundCue::Checkpoint);
        world.log.milestone(format!(
            "Checkpoint {}",
            world.last_checkpoint * CHECKPOINT_INTERVAL
        ));
    }

    if let Some(kind) = result.crashed_into {
        log_crash(world, kind);
    }

    result
}

/// First obstacle (in spawn order) overlapping the runner.
pub fn check_collision(world: &GameWorld) -> Option<ObstacleKind> {
    world
        .obstacles
        .iter()
        .find(|o| world.runner.rect.intersects(&o.rect))
        .map(|o| o.kind)
}

fn log_crash(world: &mut GameWorld, kind: ObstacleKind) {
    let score = world.displayed_score();
    world
        .log
        .warn(format!("Hit a {} at {}", kind.name(), score));
    if score > world.run_start_high_score {
        world.log.milestone(format!("New high score: {}", score));
    }
}
