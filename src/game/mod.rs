//! The runner simulation: entities, world state, per-frame logic.

pub mod event_log;
pub mod logic;
pub mod sprites;
pub mod types;

pub use event_log::{EventLog, LogEntry, LogKind};
pub use logic::{check_collision, process_input, tick_game, GameInput, TickResult};
pub use types::{Cloud, GamePhase, GameWorld, Obstacle, ObstacleKind, Runner, SoundCue};
