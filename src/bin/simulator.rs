//! T-Rex Runner Headless Simulator
//!
//! Plays the game with an autopilot and no UI, using the same `tick_game()`
//! function as the terminal game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --frames N      Frame cap per run (default: 36000)
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --dt N          Milliseconds per frame (default: 16)
//!   --verbose       Per-frame event logging
//!   --json          Print the report as JSON

use trex_runner::core::constants::CHECKPOINT_INTERVAL;
use trex_runner::game::TickResult;
use trex_runner::simulator::{parse_sim_args, sim_usage, simulate_run, SimCommand, SimReport};

fn main() {
    let config = match parse_sim_args(std::env::args().skip(1)) {
        Ok(SimCommand::Run(config)) => config,
        Ok(SimCommand::Help) => {
            eprintln!("{}", sim_usage());
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", sim_usage());
            std::process::exit(1);
        }
    };

    let mut runs = Vec::with_capacity(config.runs as usize);
    for i in 0..config.runs {
        let seed = config.seed + i as u64;
        if config.verbose {
            println!("── Run {} (seed {seed}) ──", i + 1);
        }
        let stats = simulate_run(&config, seed, |frame, result| {
            if config.verbose {
                print_frame_events(frame, result);
            }
        });
        runs.push(stats);
    }

    let report = SimReport::from_runs(&config, runs);
    if config.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report.to_text());
    }
}

// ── Verbose Output ───────────────────────────────────────────────────

fn print_frame_events(frame: u64, result: &TickResult) {
    let mut labels = Vec::new();
    if let Some(kind) = result.spawned {
        labels.push(format!("Spawned {}", kind.name()));
    }
    if result.obstacles_cleared > 0 {
        labels.push(format!("Cleared {} cactus(es)", result.obstacles_cleared));
    }
    for checkpoint in &result.checkpoints {
        labels.push(format!("Checkpoint {}", checkpoint * CHECKPOINT_INTERVAL));
    }
    if let Some(kind) = result.crashed_into {
        labels.push(format!("CRASHED into {}", kind.name()));
    }
    for label in labels {
        println!("[f={frame:>6}] {label}");
    }
}
