//! Headless autopilot runs for tuning and regression checks.
//!
//! Drives the same `process_input` / `tick_game` pair as the terminal game,
//! with a fixed frame length and a seeded RNG, so a seed always produces the
//! same report.

mod config;
mod report;
mod runner;

pub use config::{parse_sim_args, sim_usage, SimCommand, SimConfig};
pub use report::SimReport;
pub use runner::{run_simulation, simulate_run, Autopilot, RunStats};
