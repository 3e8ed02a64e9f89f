//! T-Rex Runner - terminal endless runner library.
//!
//! Exposes the simulation, input mapping and rendering so the game binary,
//! the headless simulator and the integration tests share one code path.

// Some helpers are only reached from the binaries or one feature set
#![allow(dead_code)]

pub mod audio;
pub mod config;
pub mod core;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;

pub use game::{process_input, tick_game, GameInput, GamePhase, GameWorld, SoundCue, TickResult};
