//! T-Rex Runner data structures.
//!
//! A single-screen endless runner: the runner stays at a fixed column while
//! cacti scroll in from the right. All coordinates are world pixels on an
//! 800x400 field with y growing downward.

use super::event_log::EventLog;
use crate::core::constants::*;
use crate::core::geometry::Rect;
use rand::Rng;

/// Finite game flow: waiting on the title screen, running, or crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Start,
    Play,
    GameOver,
}

impl GamePhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Ready",
            Self::Play => "Running",
            Self::GameOver => "Game Over",
        }
    }
}

/// Fire-and-forget sound requests raised by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Hit,
    Checkpoint,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Jump, SoundCue::Hit, SoundCue::Checkpoint];
}

// ── Runner ───────────────────────────────────────────────────────────

/// The player character.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    /// Collision rectangle (standing or ducking size).
    pub rect: Rect,
    /// Vertical velocity in px/frame (negative = upward).
    pub velocity: f64,
    pub on_ground: bool,
    pub ducking: bool,
    /// Milliseconds accumulated towards the next leg swap.
    pub leg_timer_ms: u64,
    /// Leg animation phase, 0 or 1.
    pub leg_frame: u8,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                RUNNER_X,
                GROUND_Y - RUNNER_STAND_HEIGHT,
                RUNNER_STAND_WIDTH,
                RUNNER_STAND_HEIGHT,
            ),
            velocity: 0.0,
            on_ground: true,
            ducking: false,
            leg_timer_ms: 0,
            leg_frame: 0,
        }
    }

    /// Launch upward if standing on the ground. Returns true if the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground || self.ducking {
            return false;
        }
        self.velocity = JUMP_IMPULSE;
        self.on_ground = false;
        true
    }

    /// Switch between the standing and ducking rectangles, keeping the feet
    /// planted. Ducking is refused while airborne.
    pub fn set_duck(&mut self, duck: bool) {
        if duck && !self.on_ground {
            return;
        }
        if duck == self.ducking {
            return;
        }

        let bottom = self.rect.bottom();
        if duck {
            self.rect.width = RUNNER_DUCK_WIDTH;
            self.rect.height = RUNNER_DUCK_HEIGHT;
        } else {
            self.rect.width = RUNNER_STAND_WIDTH;
            self.rect.height = RUNNER_STAND_HEIGHT;
        }
        self.rect.set_bottom(bottom);
        self.ducking = duck;
    }

    /// One frame of physics and leg animation.
    pub fn update(&mut self, dt_ms: u64) {
        self.velocity += GRAVITY;
        // Truncation toward zero: slow apex frames move 0 px.
        self.rect.y += self.velocity as i32;

        if self.rect.bottom() >= GROUND_Y {
            self.rect.set_bottom(GROUND_Y);
            self.velocity = 0.0;
            self.on_ground = true;
        }

        if self.on_ground {
            self.leg_timer_ms += dt_ms;
            if self.leg_timer_ms > LEG_FRAME_MS {
                self.leg_timer_ms = 0;
                self.leg_frame = 1 - self.leg_frame;
            }
        } else {
            self.leg_frame = 0;
        }
    }
}

// ── Obstacles ────────────────────────────────────────────────────────

/// Cactus variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Small,  // 20x40
    Big,    // 30x60, with arms
    Double, // 45x55, with arms
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Small,
        ObstacleKind::Big,
        ObstacleKind::Double,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(ObstacleKind::Small)
    }

    /// Uniform choice over the three variants.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_index(rng.gen_range(0..Self::ALL.len()))
    }

    pub fn width(&self) -> i32 {
        match self {
            Self::Small => 20,
            Self::Big => 30,
            Self::Double => 45,
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            Self::Small => 40,
            Self::Big => 60,
            Self::Double => 55,
        }
    }

    /// Big and double cacti are drawn with side arms.
    pub fn has_arms(&self) -> bool {
        matches!(self, Self::Big | Self::Double)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Small => "small cactus",
            Self::Big => "big cactus",
            Self::Double => "double cactus",
        }
    }
}

/// A cactus scrolling toward the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Pixels moved per tick, fixed at spawn.
    pub speed: i32,
}

impl Obstacle {
    /// A cactus of `kind` just past the right edge, standing on the ground.
    pub fn new(kind: ObstacleKind, speed: i32) -> Self {
        let height = kind.height();
        Self {
            kind,
            rect: Rect::new(
                WORLD_WIDTH + OBSTACLE_SPAWN_X_MARGIN,
                GROUND_Y - height,
                kind.width(),
                height,
            ),
            speed,
        }
    }

    pub fn spawn<R: Rng>(rng: &mut R, speed: i32) -> Self {
        Self::new(ObstacleKind::random(rng), speed)
    }

    /// One step left per tick (not scaled by dt).
    pub fn update(&mut self) {
        self.rect.x -= self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0
    }
}

// ── Clouds ───────────────────────────────────────────────────────────

/// Decorative background cloud. Never collides.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: f64,
}

impl Cloud {
    pub fn spawn<R: Rng>(rng: &mut R, world_speed: i32) -> Self {
        Self {
            x: (WORLD_WIDTH + rng.gen_range(0..=200)) as f64,
            y: rng.gen_range(50..=180),
            width: rng.gen_range(40..=80),
            height: rng.gen_range(18..=30),
            speed: world_speed as f64 * CLOUD_SPEED_FACTOR,
        }
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + (self.width as f64) < 0.0
    }

    /// Integer bounds used for drawing.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x as i32, self.y, self.width, self.height)
    }
}

// ── World ────────────────────────────────────────────────────────────

/// Everything the simulation owns between frames.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub phase: GamePhase,
    pub runner: Runner,
    /// Active obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,

    // -- Scoring --
    /// Real-valued score; displayed truncated.
    pub score: f64,
    /// Best truncated score this session. Survives restarts.
    pub high_score: u32,
    /// High score when the current run began (for end-of-run logging).
    pub run_start_high_score: u32,
    /// Number of 100-point checkpoints already announced this run.
    pub last_checkpoint: u32,

    // -- Scrolling --
    /// Obstacle scroll speed in px/tick. Constant in this version.
    pub speed: i32,
    /// Ground dash offset, wraps at GROUND_TILE_WIDTH. Not reset on restart.
    pub ground_offset: i32,

    // -- Timers (ms) --
    pub spawn_timer_ms: u64,
    pub cloud_timer_ms: u64,

    /// Frames simulated in the current run.
    pub frames: u64,

    pub log: EventLog,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl GameWorld {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Start,
            runner: Runner::new(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            score: 0.0,
            high_score: 0,
            run_start_high_score: 0,
            last_checkpoint: 0,
            speed: INITIAL_SPEED,
            ground_offset: 0,
            spawn_timer_ms: 0,
            cloud_timer_ms: 0,
            frames: 0,
            log: EventLog::new(),
        }
    }

    /// Fresh run state. High score, ground offset and the log carry over.
    pub fn reset(&mut self) {
        self.runner = Runner::new();
        self.obstacles.clear();
        self.clouds.clear();
        self.score = 0.0;
        self.run_start_high_score = self.high_score;
        self.last_checkpoint = 0;
        self.speed = INITIAL_SPEED;
        self.spawn_timer_ms = 0;
        self.cloud_timer_ms = 0;
        self.frames = 0;
    }

    /// Score as shown on screen.
    pub fn displayed_score(&self) -> u32 {
        self.score as u32
    }

    /// Night on every odd 500-point band.
    pub fn is_night(&self) -> bool {
        (self.displayed_score() / NIGHT_CYCLE) % 2 == 1
    }

    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) -> ObstacleKind {
        let obstacle = Obstacle::spawn(rng, self.speed);
        let kind = obstacle.kind;
        self.obstacles.push(obstacle);
        kind
    }

    pub fn spawn_cloud<R: Rng>(&mut self, rng: &mut R) {
        self.clouds.push(Cloud::spawn(rng, self.speed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn airborne_runner(y: i32) -> Runner {
        let mut runner = Runner::new();
        runner.rect.y = y;
        runner.on_ground = false;
        runner
    }

    // ── Runner ──

    #[test]
    fn test_new_runner_stands_on_ground() {
        let runner = Runner::new();
        assert!(runner.on_ground);
        assert!(!runner.ducking);
        assert_eq!(runner.rect.bottom(), GROUND_Y);
        assert_eq!(runner.rect.x, RUNNER_X);
        assert_eq!(runner.rect.width, RUNNER_STAND_WIDTH);
        assert_eq!(runner.rect.height, RUNNER_STAND_HEIGHT);
    }

    #[test]
    fn test_jump_sets_impulse() {
        let mut runner = Runner::new();
        assert!(runner.jump());
        assert!(!runner.on_ground);
        assert!((runner.velocity - JUMP_IMPULSE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_double_jump() {
        let mut runner = Runner::new();
        assert!(runner.jump());
        runner.update(16);
        let before = runner.clone();

        assert!(!runner.jump());
        assert_eq!(runner, before);
    }

    #[test]
    fn test_no_jump_while_ducking() {
        let mut runner = Runner::new();
        runner.set_duck(true);
        assert!(!runner.jump());
        assert!(runner.on_ground);
    }

    #[test]
    fn test_duck_refused_while_airborne() {
        let mut runner = airborne_runner(100);
        runner.velocity = -5.0;
        let before = runner.clone();

        runner.set_duck(true);

        assert_eq!(runner, before);
    }

    #[test]
    fn test_duck_and_stand_keep_feet_planted() {
        let mut runner = Runner::new();
        let bottom = runner.rect.bottom();

        runner.set_duck(true);
        assert!(runner.ducking);
        assert_eq!(runner.rect.width, RUNNER_DUCK_WIDTH);
        assert_eq!(runner.rect.height, RUNNER_DUCK_HEIGHT);
        assert_eq!(runner.rect.bottom(), bottom);

        runner.set_duck(false);
        assert!(!runner.ducking);
        assert_eq!(runner.rect.height, RUNNER_STAND_HEIGHT);
        assert_eq!(runner.rect.bottom(), bottom);
    }

    #[test]
    fn test_stand_up_is_idempotent() {
        let mut runner = Runner::new();
        let before = runner.clone();
        runner.set_duck(false);
        assert_eq!(runner, before);
    }

    #[test]
    fn test_stand_up_allowed_while_airborne() {
        // A runner that left the ground while ducking can always stand up
        let mut runner = Runner::new();
        runner.set_duck(true);
        runner.on_ground = false;

        runner.set_duck(false);

        assert!(!runner.ducking);
        assert_eq!(runner.rect.height, RUNNER_STAND_HEIGHT);
    }

    #[test]
    fn test_falling_runner_descends_each_frame() {
        let mut runner = airborne_runner(50);
        let mut last_y = runner.rect.y;
        let mut last_velocity = runner.velocity;

        while !runner.on_ground {
            runner.update(16);
            assert!(runner.velocity >= last_velocity || runner.on_ground);
            assert!(
                runner.rect.y > last_y,
                "runner should move down every frame while falling"
            );
            last_y = runner.rect.y;
            last_velocity = runner.velocity;
        }

        assert_eq!(runner.rect.bottom(), GROUND_Y);
        assert!((runner.velocity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut runner = Runner::new();
        runner.jump();

        let mut highest = runner.rect.y;
        let mut frames = 0;
        loop {
            runner.update(16);
            highest = highest.min(runner.rect.y);
            frames += 1;
            if runner.on_ground || frames > 200 {
                break;
            }
        }

        assert!(runner.on_ground, "runner should land");
        assert!(highest < GROUND_Y - RUNNER_STAND_HEIGHT - 100);
        assert_eq!(runner.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn test_grounded_update_stays_on_ground() {
        let mut runner = Runner::new();
        for _ in 0..10 {
            runner.update(16);
        }
        assert!(runner.on_ground);
        assert_eq!(runner.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn test_leg_animation_is_time_based() {
        let mut runner = Runner::new();

        // 5 x 16ms = 80ms: not past the threshold yet
        for _ in 0..5 {
            runner.update(16);
        }
        assert_eq!(runner.leg_frame, 0);

        runner.update(16);
        assert_eq!(runner.leg_frame, 1);
        assert_eq!(runner.leg_timer_ms, 0);

        // One long frame flips immediately
        runner.update(100);
        assert_eq!(runner.leg_frame, 0);
    }

    #[test]
    fn test_leg_frame_reset_in_air() {
        let mut runner = Runner::new();
        runner.leg_frame = 1;
        runner.jump();
        runner.update(16);
        assert_eq!(runner.leg_frame, 0);
    }

    // ── Obstacles ──

    #[test]
    fn test_obstacle_kind_dimensions() {
        assert_eq!(ObstacleKind::Small.width(), 20);
        assert_eq!(ObstacleKind::Small.height(), 40);
        assert!(!ObstacleKind::Small.has_arms());

        assert_eq!(ObstacleKind::Big.width(), 30);
        assert_eq!(ObstacleKind::Big.height(), 60);
        assert!(ObstacleKind::Big.has_arms());

        assert_eq!(ObstacleKind::Double.width(), 45);
        assert_eq!(ObstacleKind::Double.height(), 55);
        assert!(ObstacleKind::Double.has_arms());
    }

    #[test]
    fn test_obstacle_kind_from_index() {
        assert_eq!(ObstacleKind::from_index(0), ObstacleKind::Small);
        assert_eq!(ObstacleKind::from_index(1), ObstacleKind::Big);
        assert_eq!(ObstacleKind::from_index(2), ObstacleKind::Double);
        assert_eq!(ObstacleKind::from_index(99), ObstacleKind::Small);
    }

    #[test]
    fn test_random_kind_covers_all_variants() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let kind = ObstacleKind::random(&mut rng);
            let idx = ObstacleKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_obstacle_spawns_off_right_edge_on_ground() {
        for kind in ObstacleKind::ALL {
            let obstacle = Obstacle::new(kind, INITIAL_SPEED);
            assert_eq!(obstacle.rect.x, WORLD_WIDTH + OBSTACLE_SPAWN_X_MARGIN);
            assert_eq!(obstacle.rect.bottom(), GROUND_Y);
            assert_eq!(obstacle.speed, INITIAL_SPEED);
        }
    }

    #[test]
    fn test_obstacle_moves_fixed_step() {
        let mut obstacle = Obstacle::new(ObstacleKind::Small, 8);
        let x = obstacle.rect.x;
        obstacle.update();
        assert_eq!(obstacle.rect.x, x - 8);
    }

    #[test]
    fn test_obstacle_off_screen_boundary() {
        let mut obstacle = Obstacle::new(ObstacleKind::Small, 8);

        obstacle.rect.x = 0;
        assert!(!obstacle.is_off_screen());

        // Right edge exactly at 0 is still kept
        obstacle.rect.x = -obstacle.rect.width;
        assert!(!obstacle.is_off_screen());

        obstacle.rect.x = -obstacle.rect.width - 1;
        assert!(obstacle.is_off_screen());
    }

    // ── Clouds ──

    #[test]
    fn test_cloud_spawn_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..100 {
            let cloud = Cloud::spawn(&mut rng, INITIAL_SPEED);
            assert!(cloud.x >= WORLD_WIDTH as f64 && cloud.x <= (WORLD_WIDTH + 200) as f64);
            assert!((50..=180).contains(&cloud.y));
            assert!((40..=80).contains(&cloud.width));
            assert!((18..=30).contains(&cloud.height));
            assert!((cloud.speed - 3.2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cloud_off_screen_boundary() {
        let mut cloud = Cloud {
            x: 0.0,
            y: 60,
            width: 50,
            height: 20,
            speed: 3.2,
        };
        assert!(!cloud.is_off_screen());

        cloud.x = -50.0;
        assert!(!cloud.is_off_screen());

        cloud.x = -50.5;
        assert!(cloud.is_off_screen());
    }

    // ── World ──

    #[test]
    fn test_new_world_defaults() {
        let world = GameWorld::new();
        assert_eq!(world.phase, GamePhase::Start);
        assert_eq!(world.displayed_score(), 0);
        assert_eq!(world.high_score, 0);
        assert_eq!(world.speed, INITIAL_SPEED);
        assert!(world.obstacles.is_empty());
        assert!(world.clouds.is_empty());
        assert!(world.runner.on_ground);
        assert!(!world.is_night());
    }

    #[test]
    fn test_reset_keeps_high_score_and_offset() {
        let mut world = GameWorld::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        world.score = 321.7;
        world.high_score = 321;
        world.ground_offset = 24;
        world.last_checkpoint = 3;
        world.spawn_timer_ms = 500;
        world.cloud_timer_ms = 700;
        world.spawn_obstacle(&mut rng);
        world.spawn_cloud(&mut rng);
        world.runner.jump();

        world.reset();

        assert_eq!(world.score, 0.0);
        assert_eq!(world.high_score, 321);
        assert_eq!(world.run_start_high_score, 321);
        assert_eq!(world.ground_offset, 24);
        assert_eq!(world.last_checkpoint, 0);
        assert_eq!(world.spawn_timer_ms, 0);
        assert_eq!(world.cloud_timer_ms, 0);
        assert!(world.obstacles.is_empty());
        assert!(world.clouds.is_empty());
        assert_eq!(world.runner, Runner::new());
    }

    #[test]
    fn test_night_bands() {
        let mut world = GameWorld::new();
        for (score, night) in [
            (0.0, false),
            (499.9, false),
            (500.0, true),
            (999.0, true),
            (1000.0, false),
            (1500.0, true),
            (2000.0, false),
            (2500.0, true),
        ] {
            world.score = score;
            assert_eq!(world.is_night(), night, "score {}", score);
        }
    }

    #[test]
    fn test_spawned_obstacle_inherits_world_speed() {
        let mut world = GameWorld::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        world.spawn_obstacle(&mut rng);

        // Later speed changes do not affect an existing obstacle
        world.speed = 20;
        assert_eq!(world.obstacles[0].speed, INITIAL_SPEED);
    }
}
