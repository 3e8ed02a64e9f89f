// Play field (world units are pixels of an 800x400 surface)
pub const WORLD_WIDTH: i32 = 800;
pub const WORLD_HEIGHT: i32 = 400;
pub const GROUND_Y: i32 = 320;

// Frame pacing
pub const TARGET_FPS: u64 = 60;
pub const FRAME_BUDGET_MS: u64 = 1000 / TARGET_FPS;
pub const MAX_FRAME_DT_MS: u64 = 100;

// Runner
pub const RUNNER_X: i32 = 80;
pub const RUNNER_STAND_WIDTH: i32 = 40;
pub const RUNNER_STAND_HEIGHT: i32 = 50;
pub const RUNNER_DUCK_WIDTH: i32 = 60;
pub const RUNNER_DUCK_HEIGHT: i32 = 30;
pub const GRAVITY: f64 = 1.1;
pub const JUMP_IMPULSE: f64 = -20.0;
pub const LEG_FRAME_MS: u64 = 80;

// Scrolling and spawning
pub const INITIAL_SPEED: i32 = 8;
pub const OBSTACLE_SPAWN_X_MARGIN: i32 = 20;
pub const OBSTACLE_SPAWN_MIN_MS: u64 = 900;
pub const OBSTACLE_SPAWN_MAX_MS: u64 = 1400;
pub const CLOUD_SPAWN_MIN_MS: u64 = 1200;
pub const CLOUD_SPAWN_MAX_MS: u64 = 2500;
pub const CLOUD_SPEED_FACTOR: f64 = 0.4;
pub const GROUND_TILE_WIDTH: i32 = 40;
pub const GROUND_DASH_LENGTH: i32 = 20;

// Scoring
pub const SCORE_PER_MS: f64 = 0.01;
pub const CHECKPOINT_INTERVAL: u32 = 100;
pub const NIGHT_CYCLE: u32 = 500;

// Session log shown in the info panel
pub const EVENT_LOG_CAPACITY: usize = 8;

// Terminals without key-release reporting: how long a Down press keeps the
// runner ducked (longer than the usual auto-repeat delay).
pub const DUCK_HOLD_MS: u64 = 550;
